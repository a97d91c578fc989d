//! The match engine: pure filtering of records against a query string.

use crate::record::Record;

/// Controls how record keys are compared against queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Match the query anywhere in the key instead of only at offset 0.
    pub contains: bool,
    /// Compare without case folding.
    pub case_sensitive: bool,
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contains(mut self, contains: bool) -> Self {
        self.contains = contains;
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

/// Return the subset of `records` whose key matches `query`.
///
/// Keys are compared in decoded form; when `case_sensitive` is off both
/// sides are lower-cased first. The relative order of matching records is
/// preserved and the input is never mutated. An empty query in prefix mode
/// matches every record.
pub fn filter(records: &[Record], query: &str, options: MatchOptions) -> Vec<Record> {
    let needle = if options.case_sensitive {
        query.to_string()
    } else {
        query.to_lowercase()
    };

    records
        .iter()
        .filter(|record| {
            let key = if options.case_sensitive {
                record.key().to_string()
            } else {
                record.key().to_lowercase()
            };
            if options.contains {
                key.contains(&needle)
            } else {
                key.starts_with(&needle)
            }
        })
        .cloned()
        .collect()
}
