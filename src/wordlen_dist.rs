//! Word-length distribution: the positive 64-bit weight used to cap batch
//! size in the emission driver and to order the length scheduler.

use crate::buckets::Buckets;
use crate::config::WORDLEN_DIST_DEFAULT;

/// Either the built-in reference-corpus table or the observed bucket sizes
/// of the loaded wordlist (selected by `--wl-dist-len`).
pub enum WordlenDist<'a> {
    Builtin,
    Observed(&'a Buckets),
}

impl<'a> WordlenDist<'a> {
    /// Weight for output length `l`. Always positive.
    pub fn weight(&self, l: u8) -> u64 {
        match self {
            WordlenDist::Builtin => WORDLEN_DIST_DEFAULT
                .get(l as usize)
                .copied()
                .unwrap_or(1)
                .max(1),
            WordlenDist::Observed(buckets) => (buckets.len_at(l as usize) as u64).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_values() {
        let d = WordlenDist::Builtin;
        assert_eq!(d.weight(1), 15);
        assert_eq!(d.weight(6), 276252);
        assert_eq!(d.weight(24), 13);
    }

    #[test]
    fn builtin_beyond_24_defaults_to_one() {
        let d = WordlenDist::Builtin;
        assert_eq!(d.weight(25), 1);
        assert_eq!(d.weight(200), 1);
    }

    #[test]
    fn observed_reflects_bucket_size() {
        let mut buckets = Buckets::new();
        buckets.push(b"ab");
        buckets.push(b"cd");
        buckets.push(b"ef");
        let d = WordlenDist::Observed(&buckets);
        assert_eq!(d.weight(2), 3);
    }

    #[test]
    fn observed_empty_bucket_is_at_least_one() {
        let buckets = Buckets::new();
        let d = WordlenDist::Observed(&buckets);
        assert_eq!(d.weight(5), 1);
    }
}
