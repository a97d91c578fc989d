//! Dispatcher configuration options.

use std::time::Duration;

/// Configuration for the request dispatcher.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Queries shorter than this are gated (hide signal, no dispatch).
    /// A value of -1 disables the pipeline entirely.
    pub min_query_length: i32,
    /// Debounce interval before dispatch; zero dispatches immediately.
    pub query_delay: Duration,
    /// Characters that split a retained prefix from the active query.
    pub delimiters: Vec<char>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            min_query_length: 1,
            query_delay: Duration::from_millis(200),
            delimiters: Vec::new(),
        }
    }
}

impl DispatcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration with the pipeline turned off.
    pub fn disabled() -> Self {
        Self {
            min_query_length: -1,
            ..Default::default()
        }
    }

    pub fn with_min_query_length(mut self, min_query_length: i32) -> Self {
        self.min_query_length = min_query_length;
        self
    }

    pub fn with_query_delay(mut self, query_delay: Duration) -> Self {
        self.query_delay = query_delay;
        self
    }

    pub fn with_delimiters(mut self, delimiters: Vec<char>) -> Self {
        self.delimiters = delimiters;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.min_query_length < 0
    }
}
