//! Cache statistics tracking.

use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics for cache performance monitoring.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of lookups answered from the cache (exact or subset).
    hits: AtomicU64,
    /// Number of lookups that fell through to the source.
    misses: AtomicU64,
    /// Number of hits served by re-filtering a broader entry.
    subset_hits: AtomicU64,
    /// Number of entries evicted by capacity.
    evictions: AtomicU64,
    /// Current number of entries.
    entry_count: AtomicU64,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_subset_hit(&self) {
        self.subset_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn set_entry_count(&self, count: u64) {
        self.entry_count.store(count, Ordering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn subset_hits(&self) -> u64 {
        self.subset_hits.load(Ordering::Relaxed)
    }

    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    pub fn entry_count(&self) -> u64 {
        self.entry_count.load(Ordering::Relaxed)
    }

    /// Hit rate over all lookups, 0.0 to 1.0.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64;
        if total == 0.0 {
            0.0
        } else {
            hits / total
        }
    }

    pub fn total_lookups(&self) -> u64 {
        self.hits() + self.misses()
    }

    /// Reset all counters except the entry count.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.subset_hits.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
    }
}

impl Clone for CacheStats {
    fn clone(&self) -> Self {
        Self {
            hits: AtomicU64::new(self.hits()),
            misses: AtomicU64::new(self.misses()),
            subset_hits: AtomicU64::new(self.subset_hits()),
            evictions: AtomicU64::new(self.evictions()),
            entry_count: AtomicU64::new(self.entry_count()),
        }
    }
}
