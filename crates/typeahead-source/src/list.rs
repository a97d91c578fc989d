//! In-memory list source.

use async_trait::async_trait;
use typeahead_core::{filter, MatchOptions, Record, Result};

use crate::source::ResultSource;

/// Result source backed by an in-memory record list.
///
/// Queries are answered synchronously by the match engine; an empty query
/// returns the full set unfiltered, which makes the list usable as a local
/// index when subset caching is enabled downstream.
#[derive(Debug, Clone)]
pub struct ListSource {
    records: Vec<Record>,
    options: MatchOptions,
}

impl ListSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            options: MatchOptions::default(),
        }
    }

    /// Build a list of single-field records from plain keys.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(keys.into_iter().map(Record::from_key).collect())
    }

    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

#[async_trait]
impl ResultSource for ListSource {
    async fn query(&self, text: &str) -> Result<Vec<Record>> {
        if text.is_empty() {
            return Ok(self.records.clone());
        }
        Ok(filter(&self.records, text, self.options))
    }

    fn name(&self) -> &str {
        "list"
    }
}
