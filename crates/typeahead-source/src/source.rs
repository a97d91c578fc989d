use std::fmt::Debug;

use async_trait::async_trait;
use typeahead_core::{Record, Result};

/// Pluggable backend abstraction for the query pipeline.
///
/// Implementations resolve a query string into records, or an error that
/// the dispatcher surfaces once and never retries. Local sources resolve
/// immediately; the remote source suspends on the network. Cancellation of
/// a superseded request is effected by dropping the future.
#[async_trait]
pub trait ResultSource: Debug + Send + Sync {
    /// Resolve `text` into records.
    async fn query(&self, text: &str) -> Result<Vec<Record>>;

    /// Human-readable label used in log output.
    fn name(&self) -> &str;
}
