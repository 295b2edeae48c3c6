//! Chain enumeration and per-chain keyspace.
//!
//! A chain is an ordered composition of an output length `L` into parts,
//! each part indexing a word bucket. Every chain corresponds bijectively to
//! an integer `i in [0, 2^(L-1))`: reading `i`'s bits from low to high, a
//! `1` bit closes the current part and starts a new one, a `0` bit extends
//! it. This is O(L * 2^(L-1)), needs no recursion, and enumerates
//! compositions in a fixed, reproducible order.

use crate::bigint::BigInt;
use crate::buckets::Buckets;

/// One ordered composition of an output length into bucket-indexed parts.
#[derive(Debug, Clone)]
pub struct Chain {
    /// Part lengths, each in `1..=16`, summing to the chain's output length.
    pub parts: Vec<u8>,
    /// Total candidates this chain can produce: the product of the bucket
    /// sizes of its parts.
    pub ks_cnt: BigInt,
    /// Cursor into `[0, ks_cnt)`. Advances monotonically; the chain is
    /// terminal once `ks_pos == ks_cnt`.
    pub ks_pos: BigInt,
}

impl Chain {
    pub fn k(&self) -> usize {
        self.parts.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.ks_pos >= self.ks_cnt
    }
}

/// Enumerates every admitted chain for output length `length`: all
/// compositions of `length` into parts `p_i` with a non-empty
/// `Bucket[p_i]` and chain length `k` in `[elem_cnt_min, elem_cnt_max]`.
///
/// Chains are returned in bit-index enumeration order (not yet sorted by
/// keyspace — see [`crate::schedule::build_length_states`]).
pub fn enumerate_chains(
    length: u8,
    buckets: &Buckets,
    elem_cnt_min: usize,
    elem_cnt_max: usize,
) -> Vec<Chain> {
    let mut chains = Vec::new();
    if length == 0 {
        return chains;
    }

    let bit_count = length - 1;
    let total: u32 = 1u32 << bit_count;

    for i in 0..total {
        let mut parts = Vec::new();
        let mut acc: u8 = 1;
        for bit in 0..bit_count {
            if (i >> bit) & 1 == 1 {
                parts.push(acc);
                acc = 1;
            } else {
                acc += 1;
            }
        }
        parts.push(acc);

        let k = parts.len();
        if k < elem_cnt_min || k > elem_cnt_max {
            continue;
        }
        if parts.iter().any(|&p| buckets.is_empty_at(p as usize)) {
            continue;
        }

        let mut ks_cnt = BigInt::one();
        for &p in &parts {
            ks_cnt = ks_cnt.mul_small(buckets.len_at(p as usize) as u64);
        }

        chains.push(Chain {
            parts,
            ks_cnt,
            ks_pos: BigInt::zero(),
        });
    }

    chains
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets_with(lens: &[(usize, usize)]) -> Buckets {
        let mut b = Buckets::new();
        for &(len, count) in lens {
            for i in 0..count {
                let word = vec![b'a' + (i % 26) as u8; len];
                b.push(&word);
            }
        }
        b
    }

    #[test]
    fn length_one_single_composition() {
        let buckets = buckets_with(&[(1, 3)]);
        let chains = enumerate_chains(1, &buckets, 1, 8);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].parts, vec![1]);
        assert_eq!(chains[0].ks_cnt.to_u64(), Some(3));
    }

    #[test]
    fn length_two_has_two_compositions_in_enumeration_order() {
        let buckets = buckets_with(&[(1, 1), (2, 1)]);
        let chains = enumerate_chains(2, &buckets, 1, 8);
        // i=0 -> acc never closed -> [2]; i=1 -> bit set -> [1,1].
        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].parts, vec![2]);
        assert_eq!(chains[1].parts, vec![1, 1]);
    }

    #[test]
    fn enumeration_count_matches_2_pow_l_minus_1_before_filtering() {
        let buckets = buckets_with(&[(1, 1), (2, 1), (3, 1), (4, 1)]);
        let chains = enumerate_chains(4, &buckets, 1, 4);
        assert_eq!(chains.len(), 1 << 3);
    }

    #[test]
    fn empty_bucket_prunes_chain() {
        // No words of length 2 -> every composition using part 2 is dropped.
        let buckets = buckets_with(&[(1, 5)]);
        let chains = enumerate_chains(2, &buckets, 1, 8);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].parts, vec![1, 1]);
    }

    #[test]
    fn elem_cnt_bounds_restrict_k() {
        let buckets = buckets_with(&[(1, 2), (2, 2), (3, 2)]);
        // length 3 has compositions: [3], [1,2], [2,1], [1,1,1] (k = 1,2,2,3)
        let only_k1 = enumerate_chains(3, &buckets, 1, 1);
        assert_eq!(only_k1.len(), 1);
        assert_eq!(only_k1[0].parts, vec![3]);

        let only_k3 = enumerate_chains(3, &buckets, 3, 3);
        assert_eq!(only_k3.len(), 1);
        assert_eq!(only_k3[0].parts, vec![1, 1, 1]);
    }

    #[test]
    fn ks_cnt_is_product_of_bucket_sizes() {
        let buckets = buckets_with(&[(1, 2), (2, 3)]);
        let chains = enumerate_chains(3, &buckets, 1, 8);
        // [1,2] and [2,1] both have ks_cnt = 2*3 = 6; [1,1,1] has 2*2*2=8.
        for c in &chains {
            let expected: u64 = c.parts.iter().map(|&p| buckets.len_at(p as usize) as u64).product();
            assert_eq!(c.ks_cnt.to_u64(), Some(expected));
        }
    }

    #[test]
    fn chain_is_terminal_when_ks_pos_reaches_ks_cnt() {
        let mut chain = Chain {
            parts: vec![1],
            ks_cnt: BigInt::from_u64(3),
            ks_pos: BigInt::from_u64(2),
        };
        assert!(!chain.is_terminal());
        chain.ks_pos = BigInt::from_u64(3);
        assert!(chain.is_terminal());
    }

    #[test]
    fn zero_length_enumerates_nothing() {
        let buckets = buckets_with(&[(1, 1)]);
        assert!(enumerate_chains(0, &buckets, 1, 8).is_empty());
    }
}
