//! Caller-supplied function source.

use std::fmt;

use async_trait::async_trait;
use typeahead_core::{Record, Result, TypeaheadError};

use crate::source::ResultSource;

type DataFn = dyn Fn(&str) -> Option<Vec<Record>> + Send + Sync;

/// Result source backed by a synchronous caller-supplied function.
///
/// The function returns the records for a query, or `None` to signal a
/// source-level failure, which is surfaced as a data error and never
/// cached.
pub struct FunctionSource {
    func: Box<DataFn>,
}

impl FunctionSource {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&str) -> Option<Vec<Record>> + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
        }
    }
}

impl fmt::Debug for FunctionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionSource").finish_non_exhaustive()
    }
}

#[async_trait]
impl ResultSource for FunctionSource {
    async fn query(&self, text: &str) -> Result<Vec<Record>> {
        (self.func)(text).ok_or_else(|| {
            TypeaheadError::SourceError("data function returned no result set".to_string())
        })
    }

    fn name(&self) -> &str {
        "function"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_function_results_pass_through() {
        let source = FunctionSource::new(|text| {
            Some(vec![Record::from_key(format!("{text}-match"))])
        });
        let results = source.query("ab").await.unwrap();
        assert_eq!(results[0].key(), "ab-match");
    }

    #[tokio::test]
    async fn test_none_is_a_source_error() {
        let source = FunctionSource::new(|_| None);
        let err = source.query("ab").await.unwrap_err();
        assert!(matches!(err, TypeaheadError::SourceError(_)));
    }

    #[tokio::test]
    async fn test_empty_results_are_not_an_error() {
        let source = FunctionSource::new(|_| Some(Vec::new()));
        assert!(source.query("ab").await.unwrap().is_empty());
    }
}
