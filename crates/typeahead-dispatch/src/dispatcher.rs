//! The request dispatcher state machine.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use typeahead_cache::QueryCache;
use typeahead_source::ResultSource;

use crate::config::DispatcherConfig;
use crate::extract::extract_query;
use crate::sink::ResultSink;

/// Orchestrates the query pipeline: delimiter extraction, length gating,
/// debouncing, cache reuse, source dispatch, and supersession of stale
/// in-flight work.
///
/// Must be used from within a Tokio runtime; the debounce timer and source
/// resolutions run as spawned tasks. Every call to [`submit`] supersedes
/// whatever the dispatcher was doing before: the most recent submission is
/// the only one whose results may reach the sink.
///
/// [`submit`]: RequestDispatcher::submit
pub struct RequestDispatcher {
    inner: Arc<Inner>,
}

struct Inner {
    config: DispatcherConfig,
    source: Arc<dyn ResultSource>,
    cache: Arc<QueryCache>,
    sink: Arc<dyn ResultSink>,
    /// Generation token; a resolution is delivered only if its token still
    /// equals this counter when it completes.
    generation: AtomicU64,
    state: Mutex<DispatchState>,
}

#[derive(Default)]
struct DispatchState {
    retained_prefix: Option<String>,
    pending: Option<JoinHandle<()>>,
}

impl RequestDispatcher {
    pub fn new(
        config: DispatcherConfig,
        source: Arc<dyn ResultSource>,
        cache: Arc<QueryCache>,
        sink: Arc<dyn ResultSink>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                source,
                cache,
                sink,
                generation: AtomicU64::new(0),
                state: Mutex::new(DispatchState::default()),
            }),
        }
    }

    /// Submit the current raw input of the text field.
    ///
    /// Follows the pipeline state machine: disabled check, delimiter
    /// extraction, length gate, debounce, then cache-or-source dispatch.
    /// With a zero `query_delay` a cache hit invokes the sink
    /// synchronously.
    pub fn submit(&self, raw_text: &str) {
        let inner = &self.inner;
        let token = inner.next_token();

        if inner.config.is_disabled() {
            debug!("pipeline disabled by configuration");
            inner.sink.on_hide();
            return;
        }

        let active = inner.extract_active(raw_text);

        let min = inner.config.min_query_length as i64;
        let gated = if active.is_empty() {
            min > 0
        } else {
            (active.chars().count() as i64) < min
        };
        if gated {
            debug!(query = %active, "query below minimum length");
            inner.sink.on_hide();
            return;
        }

        if inner.config.query_delay.is_zero() {
            Arc::clone(inner).dispatch(active, token);
        } else {
            let delay = inner.config.query_delay;
            let task_inner = Arc::clone(inner);
            let handle = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                if task_inner.generation.load(Ordering::SeqCst) == token {
                    Arc::clone(&task_inner).dispatch(active, token);
                }
            });
            inner.state.lock().pending = Some(handle);
        }
    }

    /// Clear the query cache.
    pub fn flush_cache(&self) {
        self.inner.cache.flush();
    }

    /// The prefix retained by the last delimited submission, if any. The
    /// consumer prepends it when committing a selection back into the
    /// field.
    pub fn retained_prefix(&self) -> Option<String> {
        self.inner.state.lock().retained_prefix.clone()
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.inner.cache
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.inner.config
    }
}

impl Inner {
    /// Advance the generation and cancel whatever was pending. The newest
    /// submission always wins, including ones that end up gated.
    fn next_token(&self) -> u64 {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(handle) = self.state.lock().pending.take() {
            handle.abort();
        }
        token
    }

    /// Resolve the active query substring and maintain the retained
    /// prefix across submissions.
    fn extract_active(&self, raw_text: &str) -> String {
        if self.config.delimiters.is_empty() {
            return raw_text.to_string();
        }
        let extraction = extract_query(raw_text, &self.config.delimiters);
        let mut state = self.state.lock();
        if extraction.prefix.is_empty() {
            // No delimiter in the input; a retained prefix survives only
            // while it still leads the raw text.
            if state
                .retained_prefix
                .as_deref()
                .is_some_and(|prefix| !raw_text.starts_with(prefix))
            {
                state.retained_prefix = None;
            }
        } else {
            state.retained_prefix = Some(extraction.prefix.clone());
        }
        extraction.query
    }

    /// Try the cache, else hand the query to the source.
    fn dispatch(self: Arc<Self>, query: String, token: u64) {
        if let Some(results) = self.cache.lookup(&query) {
            debug!(query = %query, results = results.len(), "serving results from cache");
            self.sink.on_results(&query, &results);
            return;
        }

        let inner = Arc::clone(&self);
        let handle = tokio::spawn(async move {
            inner.resolve(query, token).await;
        });
        self.state.lock().pending = Some(handle);
    }

    /// Await the source and deliver the outcome, unless superseded.
    async fn resolve(self: Arc<Self>, query: String, token: u64) {
        debug!(source = self.source.name(), query = %query, "querying source");
        let outcome = self.source.query(&query).await;

        if self.generation.load(Ordering::SeqCst) != token {
            debug!(query = %query, "dropping superseded resolution");
            return;
        }

        match outcome {
            Ok(results) => {
                self.cache.add(&query, results.clone());
                self.sink.on_results(&query, &results);
            }
            Err(error) => {
                warn!(query = %query, %error, "source resolution failed");
                self.sink.on_error(&query, &error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use async_trait::async_trait;
    use typeahead_cache::CacheConfig;
    use typeahead_core::{Record, Result, TypeaheadError};
    use typeahead_source::ListSource;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Results(String, Vec<String>),
        Error(String),
        Hide,
    }

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<Event>>,
    }

    impl RecordingSink {
        fn events(&self) -> Vec<Event> {
            self.events.lock().clone()
        }
    }

    impl ResultSink for RecordingSink {
        fn on_results(&self, query: &str, records: &[Record]) {
            let keys = records.iter().map(|r| r.key().to_string()).collect();
            self.events
                .lock()
                .push(Event::Results(query.to_string(), keys));
        }

        fn on_error(&self, query: &str, _error: &TypeaheadError) {
            self.events.lock().push(Event::Error(query.to_string()));
        }

        fn on_hide(&self) {
            self.events.lock().push(Event::Hide);
        }
    }

    /// List source that counts how often it is queried.
    #[derive(Debug)]
    struct CountingSource {
        list: ListSource,
        calls: AtomicUsize,
    }

    impl CountingSource {
        fn new(keys: &[&str]) -> Self {
            Self {
                list: ListSource::from_keys(keys.iter().copied()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ResultSource for CountingSource {
        async fn query(&self, text: &str) -> Result<Vec<Record>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.list.query(text).await
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    /// Source that stalls on one designated query and fails on "boom".
    #[derive(Debug)]
    struct StallingSource {
        slow_query: String,
        slow_delay: Duration,
    }

    #[async_trait]
    impl ResultSource for StallingSource {
        async fn query(&self, text: &str) -> Result<Vec<Record>> {
            if text == self.slow_query {
                tokio::time::sleep(self.slow_delay).await;
            }
            if text == "boom" {
                return Err(TypeaheadError::SourceError("boom".to_string()));
            }
            Ok(vec![Record::from_key(format!("{text}-result"))])
        }

        fn name(&self) -> &str {
            "stalling"
        }
    }

    fn pipeline(
        config: DispatcherConfig,
        source: Arc<dyn ResultSource>,
    ) -> (RequestDispatcher, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let cache = Arc::new(QueryCache::new(
            CacheConfig::default().with_subset_matching(false),
        ));
        let dispatcher = RequestDispatcher::new(config, source, cache, Arc::clone(&sink) as _);
        (dispatcher, sink)
    }

    fn immediate() -> DispatcherConfig {
        DispatcherConfig::default().with_query_delay(Duration::ZERO)
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_collapses_rapid_submissions() {
        let source = Arc::new(CountingSource::new(&["abc", "abd"]));
        let config = DispatcherConfig::default().with_query_delay(Duration::from_millis(200));
        let (dispatcher, sink) = pipeline(config, Arc::clone(&source) as _);

        dispatcher.submit("a");
        dispatcher.submit("ab");
        dispatcher.submit("abc");

        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(source.calls(), 1);
        assert_eq!(
            sink.events(),
            vec![Event::Results("abc".to_string(), vec!["abc".to_string()])]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_supersession_drops_stale_resolution() {
        let source = Arc::new(StallingSource {
            slow_query: "first".to_string(),
            slow_delay: Duration::from_millis(500),
        });
        let (dispatcher, sink) = pipeline(immediate(), source as _);

        dispatcher.submit("first");
        tokio::time::sleep(Duration::from_millis(10)).await;
        dispatcher.submit("second");
        tokio::time::sleep(Duration::from_millis(700)).await;

        assert_eq!(
            sink.events(),
            vec![Event::Results(
                "second".to_string(),
                vec!["second-result".to_string()]
            )]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_exact_cache_hit_skips_source() {
        let source = Arc::new(CountingSource::new(&["abc"]));
        let (dispatcher, sink) = pipeline(immediate(), Arc::clone(&source) as _);

        dispatcher.submit("ab");
        tokio::time::sleep(Duration::from_millis(10)).await;
        dispatcher.submit("ab");
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(source.calls(), 1);
        assert_eq!(sink.events().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gate_blocks_short_queries() {
        let source = Arc::new(CountingSource::new(&["abc"]));
        let config = immediate().with_min_query_length(3);
        let (dispatcher, sink) = pipeline(config, Arc::clone(&source) as _);

        dispatcher.submit("ab");
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(source.calls(), 0);
        assert_eq!(sink.events(), vec![Event::Hide]);
        assert!(dispatcher.cache().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input_with_positive_minimum_hides() {
        let source = Arc::new(CountingSource::new(&["abc"]));
        let (dispatcher, sink) = pipeline(immediate(), Arc::clone(&source) as _);

        dispatcher.submit("");
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(source.calls(), 0);
        assert_eq!(sink.events(), vec![Event::Hide]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input_dispatches_when_minimum_is_zero() {
        let source = Arc::new(CountingSource::new(&["abc", "abd"]));
        let config = immediate().with_min_query_length(0);
        let (dispatcher, sink) = pipeline(config, Arc::clone(&source) as _);

        dispatcher.submit("");
        tokio::time::sleep(Duration::from_millis(10)).await;

        // An empty query against a list source returns the full set.
        assert_eq!(
            sink.events(),
            vec![Event::Results(
                String::new(),
                vec!["abc".to_string(), "abd".to_string()]
            )]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_pipeline_only_hides() {
        let source = Arc::new(CountingSource::new(&["abc"]));
        let (dispatcher, sink) = pipeline(
            DispatcherConfig::disabled().with_query_delay(Duration::ZERO),
            Arc::clone(&source) as _,
        );

        dispatcher.submit("abc");
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(source.calls(), 0);
        assert_eq!(sink.events(), vec![Event::Hide]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delimiter_extraction_searches_active_segment() {
        let source = Arc::new(CountingSource::new(&["bar", "baz"]));
        let config = immediate().with_delimiters(vec![',']);
        let (dispatcher, sink) = pipeline(config, Arc::clone(&source) as _);

        dispatcher.submit("foo, bar");
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(dispatcher.retained_prefix().as_deref(), Some("foo, "));
        assert_eq!(
            sink.events(),
            vec![Event::Results("bar".to_string(), vec!["bar".to_string()])]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_retained_prefix_discarded_when_input_diverges() {
        let source = Arc::new(CountingSource::new(&["bar", "plain"]));
        let config = immediate().with_delimiters(vec![',']);
        let (dispatcher, _sink) = pipeline(config, Arc::clone(&source) as _);

        dispatcher.submit("foo, bar");
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(dispatcher.retained_prefix().as_deref(), Some("foo, "));

        // The field was rewritten without the old prefix.
        dispatcher.submit("plain");
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(dispatcher.retained_prefix(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_source_error_reported_once_and_not_cached() {
        let source = Arc::new(StallingSource {
            slow_query: String::new(),
            slow_delay: Duration::ZERO,
        });
        let (dispatcher, sink) = pipeline(immediate(), source as _);

        dispatcher.submit("boom");
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(sink.events(), vec![Event::Error("boom".to_string())]);
        assert!(dispatcher.cache().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_gated_submission_supersedes_in_flight_request() {
        let source = Arc::new(StallingSource {
            slow_query: "abc".to_string(),
            slow_delay: Duration::from_millis(500),
        });
        let config = immediate().with_min_query_length(3);
        let (dispatcher, sink) = pipeline(config, source as _);

        dispatcher.submit("abc");
        tokio::time::sleep(Duration::from_millis(10)).await;
        // Backspacing below the minimum hides the panel; the stale "abc"
        // resolution must not surface afterwards.
        dispatcher.submit("ab");
        tokio::time::sleep(Duration::from_millis(700)).await;

        assert_eq!(sink.events(), vec![Event::Hide]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_cache_forces_source_round_trip() {
        let source = Arc::new(CountingSource::new(&["abc"]));
        let (dispatcher, _sink) = pipeline(immediate(), Arc::clone(&source) as _);

        dispatcher.submit("ab");
        tokio::time::sleep(Duration::from_millis(10)).await;
        dispatcher.flush_cache();
        dispatcher.submit("ab");
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(source.calls(), 2);
    }
}
