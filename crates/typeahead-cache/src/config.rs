//! Cache configuration options.

use typeahead_core::MatchOptions;

/// Configuration for the query cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries; 0 disables the cache entirely.
    pub max_entries: usize,
    /// Allow a broader cached query to answer a longer one locally.
    pub subset_matching: bool,
    /// Substring matching for subset re-filtering (vs. prefix).
    pub contains: bool,
    /// Compare queries and keys without case folding.
    pub case_sensitive: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 15,
            subset_matching: false,
            contains: false,
            case_sensitive: false,
        }
    }
}

impl CacheConfig {
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries,
            ..Default::default()
        }
    }

    /// A configuration with caching turned off.
    pub fn disabled() -> Self {
        Self::new(0)
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn with_subset_matching(mut self, subset_matching: bool) -> Self {
        self.subset_matching = subset_matching;
        self
    }

    pub fn with_contains(mut self, contains: bool) -> Self {
        self.contains = contains;
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// The match-engine options implied by this configuration.
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            contains: self.contains,
            case_sensitive: self.case_sensitive,
        }
    }
}
