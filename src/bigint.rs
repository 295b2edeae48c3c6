//! Arbitrary-precision non-negative integers.
//!
//! Keyspaces, cursors, and the `--skip`/`--limit` arguments can exceed
//! `u64::MAX` for wordlists with many long chains, so every quantity that
//! accumulates across chains is carried as a [`BigInt`] rather than a native
//! integer. Limbs are stored little-endian in base 1_000_000_000 so that
//! base-10 formatting and parsing never need a radix conversion.

use std::cmp::Ordering;
use std::fmt;

const BASE: u64 = 1_000_000_000;
const BASE_DIGITS: usize = 9;

/// An arbitrary-precision non-negative integer.
///
/// `limbs` is little-endian (`limbs[0]` is the least-significant base-1e9
/// digit) and never carries a trailing zero limb: a value of zero is the
/// empty vector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BigInt {
    limbs: Vec<u32>,
}

/// Error returned when parsing a decimal string that isn't a valid
/// non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBigIntError;

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid decimal integer")
    }
}

impl std::error::Error for ParseBigIntError {}

impl BigInt {
    pub fn zero() -> Self {
        BigInt { limbs: Vec::new() }
    }

    pub fn one() -> Self {
        BigInt { limbs: vec![1] }
    }

    pub fn from_u64(mut v: u64) -> Self {
        let mut limbs = Vec::new();
        while v > 0 {
            limbs.push((v % BASE) as u32);
            v /= BASE;
        }
        BigInt { limbs }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Drops trailing (most-significant) zero limbs.
    fn trim(&mut self) {
        while matches!(self.limbs.last(), Some(0)) {
            self.limbs.pop();
        }
    }

    pub fn add(&self, other: &BigInt) -> BigInt {
        let mut limbs = Vec::with_capacity(self.limbs.len().max(other.limbs.len()) + 1);
        let mut carry: u64 = 0;
        for i in 0..self.limbs.len().max(other.limbs.len()) {
            let a = *self.limbs.get(i).unwrap_or(&0) as u64;
            let b = *other.limbs.get(i).unwrap_or(&0) as u64;
            let sum = a + b + carry;
            limbs.push((sum % BASE) as u32);
            carry = sum / BASE;
        }
        if carry > 0 {
            limbs.push(carry as u32);
        }
        let mut result = BigInt { limbs };
        result.trim();
        result
    }

    /// Subtracts `other` from `self`. Panics (via underflow) if `other > self`;
    /// every call site first establishes `other <= self` from the emission
    /// driver's invariants.
    pub fn sub(&self, other: &BigInt) -> BigInt {
        assert!(self >= other, "BigInt subtraction underflow");
        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow: i64 = 0;
        for i in 0..self.limbs.len() {
            let a = self.limbs[i] as i64;
            let b = *other.limbs.get(i).unwrap_or(&0) as i64;
            let mut diff = a - b - borrow;
            if diff < 0 {
                diff += BASE as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            limbs.push(diff as u32);
        }
        let mut result = BigInt { limbs };
        result.trim();
        result
    }

    pub fn mul_small(&self, k: u64) -> BigInt {
        if k == 0 || self.is_zero() {
            return BigInt::zero();
        }
        let mut limbs = Vec::with_capacity(self.limbs.len() + 3);
        let mut carry: u128 = 0;
        for &limb in &self.limbs {
            let prod = limb as u128 * k as u128 + carry;
            limbs.push((prod % BASE as u128) as u32);
            carry = prod / BASE as u128;
        }
        while carry > 0 {
            limbs.push((carry % BASE as u128) as u32);
            carry /= BASE as u128;
        }
        let mut result = BigInt { limbs };
        result.trim();
        result
    }

    /// Divides by `k`, returning `(quotient, remainder)`. Panics if `k == 0`.
    pub fn div_small(&self, k: u64) -> (BigInt, u64) {
        assert!(k > 0, "division by zero");
        let mut limbs = vec![0u32; self.limbs.len()];
        let mut rem: u64 = 0;
        for i in (0..self.limbs.len()).rev() {
            let cur = rem * BASE + self.limbs[i] as u64;
            limbs[i] = (cur / k) as u32;
            rem = cur % k;
        }
        let mut result = BigInt { limbs };
        result.trim();
        (result, rem)
    }

    pub fn mod_small(&self, k: u64) -> u64 {
        self.div_small(k).1
    }

    /// Converts to `u64` if the value fits, otherwise `None`.
    pub fn to_u64(&self) -> Option<u64> {
        let mut value: u128 = 0;
        for &limb in self.limbs.iter().rev() {
            value = value.checked_mul(BASE as u128)?.checked_add(limb as u128)?;
            if value > u64::MAX as u128 {
                return None;
            }
        }
        Some(value as u64)
    }

    pub fn to_decimal_string(&self) -> String {
        if self.limbs.is_empty() {
            return "0".to_owned();
        }
        let mut s = String::with_capacity(self.limbs.len() * BASE_DIGITS);
        s.push_str(&self.limbs[self.limbs.len() - 1].to_string());
        for &limb in self.limbs[..self.limbs.len() - 1].iter().rev() {
            s.push_str(&format!("{:0width$}", limb, width = BASE_DIGITS));
        }
        s
    }

    pub fn from_decimal_str(s: &str) -> Result<BigInt, ParseBigIntError> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseBigIntError);
        }
        let bytes = s.as_bytes();
        let mut limbs = Vec::new();
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(BASE_DIGITS);
            let chunk = std::str::from_utf8(&bytes[start..end]).unwrap();
            limbs.push(chunk.parse::<u32>().map_err(|_| ParseBigIntError)?);
            end = start;
        }
        let mut result = BigInt { limbs };
        result.trim();
        Ok(result)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => self.limbs.iter().rev().cmp(other.limbs.iter().rev()),
            ord => ord,
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}
