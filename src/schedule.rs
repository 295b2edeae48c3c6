//! Length state and the length scheduler.
//!
//! [`LengthState`] owns the sorted chain array for one output length and the
//! cursor into it. [`order_lengths`] builds the fixed round-robin order the
//! emission driver visits lengths in.

use std::collections::BTreeMap;

use crate::buckets::Buckets;
use crate::chain::{enumerate_chains, Chain};
use crate::wordlen_dist::WordlenDist;

/// Owns the sorted chain array for one output length plus the index of the
/// currently active chain. Terminal once `elems_pos == chains.len()`.
#[derive(Debug, Default)]
pub struct LengthState {
    pub chains: Vec<Chain>,
    pub elems_pos: usize,
}

impl LengthState {
    pub fn is_terminal(&self) -> bool {
        self.elems_pos >= self.chains.len()
    }

    pub fn active_chain_mut(&mut self) -> Option<&mut Chain> {
        self.chains.get_mut(self.elems_pos)
    }
}

/// Builds one [`LengthState`] per length in `pw_min..=pw_max`, with chains
/// enumerated and then sorted ascending by `ks_cnt`. Ties keep enumeration
/// order: `Vec::sort_by` is stable, so the first composition encountered for
/// a given keyspace size sorts first.
pub fn build_length_states(
    pw_min: u8,
    pw_max: u8,
    buckets: &Buckets,
    elem_cnt_min: usize,
    elem_cnt_max: usize,
) -> BTreeMap<u8, LengthState> {
    let mut map = BTreeMap::new();
    for l in pw_min..=pw_max {
        let mut chains = enumerate_chains(l, buckets, elem_cnt_min, elem_cnt_max);
        chains.sort_by(|a, b| a.ks_cnt.cmp(&b.ks_cnt));
        map.insert(l, LengthState { chains, elems_pos: 0 });
    }
    map
}

/// Orders `pw_min..=pw_max` descending by [`WordlenDist`] weight (ties
/// broken by ascending length), so more-probable lengths are visited first
/// in each round-robin pass. This is a documented total order rather than
/// the reference's indeterminate boolean-as-three-way comparator; the set
/// of chains visited per length is unchanged, only the interleaving order.
pub fn order_lengths(pw_min: u8, pw_max: u8, dist: &WordlenDist) -> Vec<u8> {
    let mut lengths: Vec<u8> = (pw_min..=pw_max).collect();
    lengths.sort_by(|&a, &b| dist.weight(b).cmp(&dist.weight(a)).then(a.cmp(&b)));
    lengths
}
