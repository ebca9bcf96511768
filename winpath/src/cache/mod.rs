//! Two-tier normalization cache.
//!
//! - The positive tier maps raw input to its [`CanonicalPath`].
//! - The negative tier remembers rejected input behind a Bloom filter.
//!
//! Both tiers are sharded LRU maps, each shard behind its own
//! `parking_lot::Mutex`. Values are cloned out under the shard lock, so a
//! caller sees either a complete entry or none. Two threads missing on the
//! same key both compute; the later publish replaces the earlier, equal one.

mod lru;
mod negative;
mod stats;

pub use stats::CacheStats;

use log::{debug, trace};

use self::lru::ShardedLru;
use self::negative::{NegativeLookup, NegativeTier};
use self::stats::Counters;
use crate::canonical::CanonicalPath;
use crate::config::CacheConfig;
use crate::error::{PathError, Result};

/// A cached normalization outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEntry {
    /// The input normalized to this path.
    Hit(CanonicalPath),
    /// The input was rejected with this error.
    Rejected(PathError),
}

impl CacheEntry {
    /// Convert into the result the entry records.
    ///
    /// # Errors
    ///
    /// Returns the stored error for a [`CacheEntry::Rejected`] entry.
    pub fn into_result(self) -> Result<CanonicalPath> {
        match self {
            Self::Hit(path) => Ok(path),
            Self::Rejected(err) => Err(err),
        }
    }
}

/// Concurrent memoization of raw string to canonical form or rejection.
///
/// # Examples
///
/// ```
/// use winpath::cache::NormalizationCache;
/// use winpath::config::CacheConfig;
/// use winpath::Normalizer;
///
/// let cache = NormalizationCache::new(&CacheConfig::default());
/// let normalizer = Normalizer::default();
///
/// let first = cache.get_or_compute("/mnt/c/x", |raw| normalizer.normalize(raw)).unwrap();
/// let second = cache.get_or_compute("/mnt/c/x", |raw| normalizer.normalize(raw)).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(cache.stats().hits, 1);
/// ```
pub struct NormalizationCache {
    positive: ShardedLru<CanonicalPath>,
    negative: NegativeTier,
    counters: Counters,
}

impl NormalizationCache {
    /// Create an empty cache sized by `config`.
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            positive: ShardedLru::new(config.capacity, config.shards),
            negative: NegativeTier::new(
                config.negative_capacity,
                config.shards,
                config.negative_expected_items,
                config.false_positive_rate,
            ),
            counters: Counters::default(),
        }
    }

    /// Look up a previous outcome for exactly `raw`.
    ///
    /// Counts as a hit, negative hit or miss in [`CacheStats`].
    pub fn lookup(&self, raw: &str) -> Option<CacheEntry> {
        if let Some(path) = self.positive.get(raw) {
            trace!("cache hit for '{raw}'");
            self.counters.record_hit();
            return Some(CacheEntry::Hit(path));
        }

        match self.negative.lookup(raw) {
            NegativeLookup::Rejected(err) => {
                trace!("negative cache hit for '{raw}'");
                self.counters.record_negative_hit();
                return Some(CacheEntry::Rejected(err));
            }
            NegativeLookup::Unconfirmed => {
                trace!("negative cache filter matched '{raw}' without an entry");
                self.counters.record_false_positive();
            }
            NegativeLookup::Absent => {}
        }

        self.counters.record_miss();
        None
    }

    /// Return the cached outcome for `raw`, or run `compute` and publish
    /// its outcome.
    ///
    /// # Errors
    ///
    /// Returns the cached or freshly computed [`PathError`].
    pub fn get_or_compute<F>(&self, raw: &str, compute: F) -> Result<CanonicalPath>
    where
        F: FnOnce(&str) -> Result<CanonicalPath>,
    {
        if let Some(entry) = self.lookup(raw) {
            return entry.into_result();
        }

        debug!("cache miss for '{raw}'");
        let outcome = compute(raw);
        self.publish(raw, &outcome);
        outcome
    }

    fn publish(&self, raw: &str, outcome: &Result<CanonicalPath>) {
        self.counters.record_insertion();
        match outcome {
            Ok(path) => {
                if self.positive.insert(raw, path.clone()) {
                    debug!("evicted least recently used path to admit '{raw}'");
                    self.counters.record_eviction();
                }
            }
            Err(err) => {
                debug!("rejected '{raw}': {err}");
                let recorded = self.negative.record(raw, err.clone());
                if recorded.evicted {
                    debug!("evicted least recently used rejection to admit '{raw}'");
                    self.counters.record_eviction();
                }
                if recorded.filter_rebuilt {
                    self.counters.record_filter_rebuild();
                }
            }
        }
    }

    /// Snapshot of the counters and current entry counts.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.counters
            .snapshot(self.positive.len(), self.negative.len())
    }

    /// Positive tier capacity across all shards.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.positive.capacity()
    }

    /// Drop every entry from both tiers. Counters are kept.
    pub fn clear(&self) {
        self.positive.clear();
        self.negative.clear();
    }
}
