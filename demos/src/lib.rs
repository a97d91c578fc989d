//! Shared helpers for the demo binaries.

use typeahead_core::{Record, TypeaheadError};
use typeahead_dispatch::ResultSink;

/// Sink that prints every pipeline callback to stdout.
#[derive(Debug, Default)]
pub struct PrintSink;

impl ResultSink for PrintSink {
    fn on_results(&self, query: &str, records: &[Record]) {
        println!("results for {query:?} ({} records):", records.len());
        for record in records {
            println!("  {}", record.fields().join(" | "));
        }
    }

    fn on_error(&self, query: &str, error: &TypeaheadError) {
        println!("error for {query:?}: {error}");
    }

    fn on_hide(&self) {
        println!("(hide results panel)");
    }
}

/// Install a stdout tracing subscriber for the demos.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}
