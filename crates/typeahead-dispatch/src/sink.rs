use typeahead_core::{Record, TypeaheadError};

/// Callback contract between the pipeline and its consumer.
///
/// The consumer (typically a UI layer) receives results, errors, and hide
/// signals. `on_results` is invoked exactly once per non-superseded,
/// non-gated submission; errors are reported once and never retried by the
/// pipeline itself.
pub trait ResultSink: Send + Sync {
    /// Results resolved for `query`, from the cache or a source.
    fn on_results(&self, query: &str, records: &[Record]);

    /// A resolution for `query` failed. The submission produced zero
    /// results and nothing was cached.
    fn on_error(&self, query: &str, error: &TypeaheadError);

    /// The results panel should be hidden: the submission was gated by the
    /// minimum query length or the pipeline is disabled.
    fn on_hide(&self) {}
}
