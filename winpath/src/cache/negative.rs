//! The negative tier: rejected inputs behind a Bloom filter.
//!
//! The filter only says "maybe rejected". A filter hit is confirmed against a
//! bounded LRU of errors; an unconfirmed hit (a false positive, or an entry
//! evicted since) falls back to recomputation. Once the filter has admitted
//! as many keys as it was sized for it is rebuilt empty, which can only
//! cause extra recomputation.

use bloomfilter::Bloom;
use log::debug;
use parking_lot::RwLock;

use super::lru::ShardedLru;
use crate::error::PathError;

/// Outcome of consulting the negative tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NegativeLookup {
    /// The filter has never seen the key.
    Absent,
    /// The key is a known rejection.
    Rejected(PathError),
    /// The filter matched but no rejection is stored.
    Unconfirmed,
}

/// What happened while recording a rejection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Recorded {
    pub(crate) evicted: bool,
    pub(crate) filter_rebuilt: bool,
}

struct Filter {
    bloom: Bloom<str>,
    admitted: usize,
}

pub(crate) struct NegativeTier {
    filter: RwLock<Filter>,
    rejected: ShardedLru<PathError>,
    expected_items: usize,
}

impl NegativeTier {
    pub(crate) fn new(
        capacity: usize,
        shards: usize,
        expected_items: usize,
        false_positive_rate: f64,
    ) -> Self {
        let expected_items = expected_items.max(1);
        Self {
            filter: RwLock::new(Filter {
                bloom: Bloom::new_for_fp_rate(expected_items, false_positive_rate),
                admitted: 0,
            }),
            rejected: ShardedLru::new(capacity, shards),
            expected_items,
        }
    }

    pub(crate) fn lookup(&self, raw: &str) -> NegativeLookup {
        if !self.filter.read().bloom.check(raw) {
            return NegativeLookup::Absent;
        }
        match self.rejected.get(raw) {
            Some(err) => NegativeLookup::Rejected(err),
            None => NegativeLookup::Unconfirmed,
        }
    }

    pub(crate) fn record(&self, raw: &str, err: PathError) -> Recorded {
        // Store before admitting to the filter, so a concurrent filter hit
        // finds the entry.
        let evicted = self.rejected.insert(raw, err);

        let mut filter = self.filter.write();
        let filter_rebuilt = filter.admitted >= self.expected_items;
        if filter_rebuilt {
            debug!(
                "rebuilding negative cache filter after {} admissions",
                filter.admitted
            );
            filter.bloom.clear();
            filter.admitted = 0;
        }
        filter.bloom.set(raw);
        filter.admitted += 1;

        Recorded {
            evicted,
            filter_rebuilt,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.rejected.len()
    }

    pub(crate) fn clear(&self) {
        let mut filter = self.filter.write();
        filter.bloom.clear();
        filter.admitted = 0;
        self.rejected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(capacity: usize, expected_items: usize) -> NegativeTier {
        NegativeTier::new(capacity, 1, expected_items, 0.01)
    }

    #[test]
    fn test_absent_until_recorded() {
        let tier = tier(8, 64);
        assert_eq!(tier.lookup("a<b"), NegativeLookup::Absent);

        tier.record("a<b", PathError::EmptyInput);
        assert_eq!(
            tier.lookup("a<b"),
            NegativeLookup::Rejected(PathError::EmptyInput)
        );
    }

    #[test]
    fn test_evicted_entry_is_unconfirmed() {
        let tier = tier(1, 64);
        tier.record("first", PathError::EmptyInput);
        let recorded = tier.record("second", PathError::EmptyInput);
        assert!(recorded.evicted);

        // Still in the filter, gone from the map.
        assert_eq!(tier.lookup("first"), NegativeLookup::Unconfirmed);
        assert_eq!(tier.len(), 1);
    }

    #[test]
    fn test_filter_rebuild() {
        let tier = tier(16, 2);
        assert!(!tier.record("one", PathError::EmptyInput).filter_rebuilt);
        assert!(!tier.record("two", PathError::EmptyInput).filter_rebuilt);
        assert!(tier.record("three", PathError::EmptyInput).filter_rebuilt);

        assert!(matches!(tier.lookup("three"), NegativeLookup::Rejected(_)));
        // The map still holds "one", but the rebuilt filter no longer admits
        // it, so it reads as absent (with high probability).
        assert_eq!(tier.len(), 3);
    }

    #[test]
    fn test_clear() {
        let tier = tier(8, 64);
        tier.record("x", PathError::EmptyInput);
        tier.clear();
        assert_eq!(tier.lookup("x"), NegativeLookup::Absent);
        assert_eq!(tier.len(), 0);
    }
}
