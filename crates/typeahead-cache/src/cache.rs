//! Recency-ordered query result cache.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::debug;
use typeahead_core::{filter, Record};

use crate::config::CacheConfig;
use crate::stats::CacheStats;

/// Entry stored in the cache.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The query this entry was resolved for, as submitted.
    pub query: String,
    /// The records it resolved to. Never mutated; entries are replaced,
    /// not edited.
    pub results: Vec<Record>,
}

/// Bounded, recency-ordered store of query results.
///
/// Entries are keyed by the normalized query (lower-cased unless the
/// configuration is case sensitive). Lookups are answered exactly or, when
/// subset matching is enabled, by re-filtering a broader entry whose query
/// is a left-substring of the incoming one. The whole structure sits behind
/// one mutex: lookup-then-promote and add-then-evict are compound sequences
/// that must be atomic with respect to concurrent submissions.
pub struct QueryCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
    config: CacheConfig,
    stats: Arc<CacheStats>,
}

impl QueryCache {
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            config,
            stats: Arc::new(CacheStats::new()),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    /// Whether the cache is enabled at all (`max_entries > 0`).
    pub fn is_enabled(&self) -> bool {
        self.config.max_entries > 0
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn stats(&self) -> Arc<CacheStats> {
        Arc::clone(&self.stats)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Store the results of a successful resolution as the most-recent
    /// entry, evicting the least-recent one when at capacity.
    pub fn add(&self, query: &str, results: Vec<Record>) {
        if !self.is_enabled() {
            return;
        }
        let mut entries = self.entries.lock();
        let key = self.normalize(query);
        let entry = CacheEntry {
            query: query.to_string(),
            results,
        };
        Self::insert(&mut entries, &self.stats, key, entry);
        self.stats.set_entry_count(entries.len() as u64);
    }

    /// Answer a query from the cache, or `None` on a miss.
    ///
    /// An exact hit promotes the matched entry to most-recent and returns
    /// its results. With subset matching enabled, a stored query equal to a
    /// non-empty left-substring of the incoming query is re-filtered with
    /// the match engine; the broader entry is promoted but left intact, and
    /// the filtered set is inserted as a new most-recent entry.
    pub fn lookup(&self, query: &str) -> Option<Vec<Record>> {
        if !self.is_enabled() {
            return None;
        }
        let needle = self.normalize(query);
        let mut entries = self.entries.lock();

        if let Some(entry) = entries.get(&needle) {
            self.stats.record_hit();
            debug!(%query, results = entry.results.len(), "exact cache hit");
            return Some(entry.results.clone());
        }

        if self.config.subset_matching {
            if let Some(broader_key) = find_subset_key(&entries, &needle) {
                let broader = entries
                    .get(&broader_key)
                    .map(|entry| entry.results.clone())
                    .unwrap_or_default();
                let filtered = filter(&broader, query, self.config.match_options());
                let entry = CacheEntry {
                    query: query.to_string(),
                    results: filtered.clone(),
                };
                Self::insert(&mut entries, &self.stats, needle, entry);
                self.stats.record_hit();
                self.stats.record_subset_hit();
                self.stats.set_entry_count(entries.len() as u64);
                debug!(
                    %query,
                    broader = %broader_key,
                    results = filtered.len(),
                    "subset cache hit"
                );
                return Some(filtered);
            }
        }

        self.stats.record_miss();
        None
    }

    /// Clear all entries.
    pub fn flush(&self) {
        self.entries.lock().clear();
        self.stats.set_entry_count(0);
        debug!("cache flushed");
    }

    fn normalize(&self, query: &str) -> String {
        if self.config.case_sensitive {
            query.to_string()
        } else {
            query.to_lowercase()
        }
    }

    fn insert(
        entries: &mut LruCache<String, CacheEntry>,
        stats: &CacheStats,
        key: String,
        entry: CacheEntry,
    ) {
        if let Some((displaced_key, _)) = entries.push(key.clone(), entry) {
            // A returned pair with a different key is a capacity eviction;
            // the same key means the entry was replaced in place.
            if displaced_key != key {
                stats.record_eviction();
                debug!(query = %displaced_key, "evicted least-recent cache entry");
            }
        }
    }
}

/// Scan entries most-recent-first for one whose stored query equals a
/// non-empty left-substring of the incoming query, longest substring first.
fn find_subset_key(entries: &LruCache<String, CacheEntry>, needle: &str) -> Option<String> {
    let mut prefix_ends: Vec<usize> = needle
        .char_indices()
        .map(|(index, c)| index + c.len_utf8())
        .collect();
    prefix_ends.reverse();

    for (key, _) in entries.iter() {
        for &end in &prefix_ends {
            if key == &needle[..end] {
                return Some(key.clone());
            }
        }
    }
    None
}
