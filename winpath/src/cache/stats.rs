//! Cache statistics.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// A point-in-time snapshot of cache counters.
///
/// Counters are read individually without a common lock, so a snapshot taken
/// under concurrent load may be off by the operations in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups answered by the positive tier.
    pub hits: u64,
    /// Lookups answered by the negative tier.
    pub negative_hits: u64,
    /// Lookups that had to compute.
    pub misses: u64,
    /// Bloom filter hits with no rejected entry behind them.
    pub false_positives: u64,
    /// Entries published to either tier.
    pub insertions: u64,
    /// Entries evicted from either tier under capacity pressure.
    pub evictions: u64,
    /// Times the Bloom filter was rebuilt after reaching its sizing.
    pub filter_rebuilds: u64,
    /// Entries currently in the positive tier.
    pub entries: u64,
    /// Entries currently in the negative tier.
    pub rejected_entries: u64,
}

impl CacheStats {
    /// Total lookups.
    #[must_use]
    pub fn lookups(&self) -> u64 {
        self.hits + self.negative_hits + self.misses
    }

    /// Fraction of lookups answered from either tier, `0.0` when idle.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_ratio(&self) -> f64 {
        let lookups = self.lookups();
        if lookups == 0 {
            0.0
        } else {
            (self.hits + self.negative_hits) as f64 / lookups as f64
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lookups: {} (hits: {}, negative hits: {}, misses: {}), hit ratio: {:.1}%, \
             false positives: {}, insertions: {}, evictions: {}, filter rebuilds: {}, \
             entries: {}, rejected entries: {}",
            self.lookups(),
            self.hits,
            self.negative_hits,
            self.misses,
            self.hit_ratio() * 100.0,
            self.false_positives,
            self.insertions,
            self.evictions,
            self.filter_rebuilds,
            self.entries,
            self.rejected_entries,
        )
    }
}

/// Lock-free counters behind [`CacheStats`].
#[derive(Debug, Default)]
pub(crate) struct Counters {
    hits: AtomicU64,
    negative_hits: AtomicU64,
    misses: AtomicU64,
    false_positives: AtomicU64,
    insertions: AtomicU64,
    evictions: AtomicU64,
    filter_rebuilds: AtomicU64,
}

impl Counters {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_negative_hit(&self) {
        self.negative_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_false_positive(&self) {
        self.false_positives.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_insertion(&self) {
        self.insertions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_filter_rebuild(&self) {
        self.filter_rebuilds.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, entries: usize, rejected_entries: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            negative_hits: self.negative_hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            false_positives: self.false_positives.load(Ordering::Relaxed),
            insertions: self.insertions.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            filter_rebuilds: self.filter_rebuilds.load(Ordering::Relaxed),
            entries: entries as u64,
            rejected_entries: rejected_entries as u64,
        }
    }
}
