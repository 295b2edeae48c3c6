//! The emission driver: walks the length schedule, drains each active chain
//! in bounded batches, honors `skip`/`limit`, and writes candidate bytes to
//! the sink.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use crate::bigint::BigInt;
use crate::buckets::Buckets;
use crate::materialize::materialize;
use crate::schedule::{build_length_states, order_lengths, LengthState};
use crate::wordlen_dist::WordlenDist;

/// Skip/limit range violations (spec §4.8 cases a-c). Fatal: the caller
/// reports this and exits without writing any candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    SkipExceedsKeyspace { skip: BigInt, keyspace: BigInt },
    LimitExceedsKeyspace { limit: BigInt, keyspace: BigInt },
    SkipPlusLimitExceedsKeyspace {
        skip: BigInt,
        limit: BigInt,
        keyspace: BigInt,
    },
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::SkipExceedsKeyspace { skip, keyspace } => write!(
                f,
                "skip ({skip}) exceeds the total keyspace ({keyspace})"
            ),
            GateError::LimitExceedsKeyspace { limit, keyspace } => write!(
                f,
                "limit ({limit}) exceeds the total keyspace ({keyspace})"
            ),
            GateError::SkipPlusLimitExceedsKeyspace {
                skip,
                limit,
                keyspace,
            } => write!(
                f,
                "skip + limit ({skip} + {limit}) exceeds the total keyspace ({keyspace})"
            ),
        }
    }
}

impl std::error::Error for GateError {}

/// Owns every length's chain state plus the global cursors, and drives
/// emission to completion.
pub struct Emitter<'a> {
    buckets: &'a Buckets,
    lengths: BTreeMap<u8, LengthState>,
    order: Vec<u8>,
    dist: WordlenDist<'a>,
    /// Total keyspace before any `--limit` truncation; this is what
    /// `--keyspace` reports.
    total_ks_cnt_initial: BigInt,
    /// The driver's stop condition: `total_ks_cnt_initial`, or
    /// `skip + limit` when `--limit` was given.
    total_ks_cnt: BigInt,
    total_ks_pos: BigInt,
    skip: BigInt,
}

impl<'a> Emitter<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pw_min: u8,
        pw_max: u8,
        elem_cnt_min: usize,
        elem_cnt_max: usize,
        buckets: &'a Buckets,
        dist: WordlenDist<'a>,
        skip: BigInt,
        limit: BigInt,
    ) -> Result<Self, GateError> {
        let lengths = build_length_states(pw_min, pw_max, buckets, elem_cnt_min, elem_cnt_max);
        let order = order_lengths(pw_min, pw_max, &dist);

        let mut total_ks_cnt_initial = BigInt::zero();
        for state in lengths.values() {
            for chain in &state.chains {
                total_ks_cnt_initial = total_ks_cnt_initial.add(&chain.ks_cnt);
            }
        }

        if !skip.is_zero() && skip > total_ks_cnt_initial {
            return Err(GateError::SkipExceedsKeyspace {
                skip,
                keyspace: total_ks_cnt_initial,
            });
        }
        if !limit.is_zero() && limit > total_ks_cnt_initial {
            return Err(GateError::LimitExceedsKeyspace {
                limit,
                keyspace: total_ks_cnt_initial,
            });
        }
        let skip_plus_limit = skip.add(&limit);
        if !limit.is_zero() && skip_plus_limit > total_ks_cnt_initial {
            return Err(GateError::SkipPlusLimitExceedsKeyspace {
                skip,
                limit,
                keyspace: total_ks_cnt_initial,
            });
        }

        let total_ks_cnt = if limit.is_zero() {
            total_ks_cnt_initial.clone()
        } else {
            skip_plus_limit
        };

        Ok(Emitter {
            buckets,
            lengths,
            order,
            dist,
            total_ks_cnt_initial,
            total_ks_cnt,
            total_ks_pos: BigInt::zero(),
            skip,
        })
    }

    /// The full keyspace, unaffected by `--limit` truncation. This is what
    /// `--keyspace` prints.
    pub fn keyspace(&self) -> &BigInt {
        &self.total_ks_cnt_initial
    }

    /// Runs the emission loop to completion, writing `candidate + '\n'` for
    /// every position in `[skip, skip+limit)` (or the whole keyspace when no
    /// limit was given) to `sink`.
    pub fn run<W: Write>(&mut self, sink: &mut W) -> io::Result<()> {
        let mut buf = Vec::new();
        while self.total_ks_pos < self.total_ks_cnt {
            for &l in &self.order {
                if self.total_ks_pos >= self.total_ks_cnt {
                    break;
                }
                let state = self.lengths.get_mut(&l).expect("length in schedule");
                if state.is_terminal() {
                    continue;
                }

                let weight = self.dist.weight(l);
                let iter_max = {
                    let chain = state.active_chain_mut().expect("not terminal");
                    let remaining_chain = chain.ks_cnt.sub(&chain.ks_pos);
                    let remaining_total = self.total_ks_cnt.sub(&self.total_ks_pos);
                    let mut bound = BigInt::from_u64(weight);
                    if remaining_chain < bound {
                        bound = remaining_chain;
                    }
                    if remaining_total < bound {
                        bound = remaining_total;
                    }
                    bound.to_u64().expect("batch bound fits u64 by construction")
                };

                buf.clear();
                let chain = state.active_chain_mut().expect("not terminal");
                for j in 0..iter_max {
                    if self.total_ks_pos >= self.skip {
                        let offset = chain.ks_pos.add(&BigInt::from_u64(j));
                        materialize(chain, self.buckets, &offset, &mut buf);
                        buf.push(b'\n');
                    }
                    self.total_ks_pos = self.total_ks_pos.add(&BigInt::one());
                }
                sink.write_all(&buf)?;
                sink.flush()?;

                chain.ks_pos = chain.ks_pos.add(&BigInt::from_u64(iter_max));
                if chain.ks_pos == chain.ks_cnt {
                    chain.ks_pos = BigInt::zero();
                    state.elems_pos += 1;
                }

                if self.total_ks_pos == self.total_ks_cnt {
                    return Ok(());
                }
            }
        }
        Ok(())
    }
}
