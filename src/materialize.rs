//! Candidate materializer: decodes a chain offset into concrete bytes.
//!
//! `offset` is treated as a mixed-radix integer whose radices are the bucket
//! sizes of the chain's parts, in chain order. Each division peels off the
//! lowest-order digit, so the first part cycles fastest as the offset
//! increments — adjacent candidates share a tail and differ in the head,
//! which is the locality property PRINCE relies on.

use crate::bigint::BigInt;
use crate::buckets::Buckets;
use crate::chain::Chain;

/// Appends the candidate for `chain` at keyspace offset `v` to `out`.
/// `v` must be in `[0, chain.ks_cnt)`.
pub fn materialize(chain: &Chain, buckets: &Buckets, v: &BigInt, out: &mut Vec<u8>) {
    let mut v = v.clone();
    for &p in &chain.parts {
        let radix = buckets.len_at(p as usize) as u64;
        let (quotient, idx) = v.div_small(radix);
        v = quotient;
        out.extend_from_slice(&buckets.words_at(p as usize)[idx as usize]);
    }
}
