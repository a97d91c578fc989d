//! Remote Source Example
//!
//! Wires the pipeline to an HTTP suggestion endpoint. Pass the endpoint
//! URL as the first argument; without one the demo prints the configured
//! request shape and exits.
//!
//! The endpoint is expected to answer
//! `GET <url>?q=<query>&output=json` with a payload like
//! `{"results": [{"name": "..."}]}`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use typeahead_cache::{CacheConfig, QueryCache};
use typeahead_core::Schema;
use typeahead_demos::{init_tracing, PrintSink};
use typeahead_dispatch::{DispatcherConfig, RequestDispatcher};
use typeahead_parser::{ResponseFormat, ResponseParser};
use typeahead_source::RemoteSource;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    println!("=== Remote Source Example ===\n");

    let schema = Schema::from_selectors(&["results", "name"])?;
    let parser = ResponseParser::new(ResponseFormat::Json, schema);

    let Some(endpoint) = std::env::args().nth(1) else {
        println!("no endpoint given; would request:");
        println!("  GET <endpoint>?q=<query>&output=json");
        println!("  container path: results, fields: name");
        return Ok(());
    };

    let source = Arc::new(
        RemoteSource::new(endpoint, parser)
            .with_query_param("q")
            .with_extra_param("output", "json")
            .with_timeout(Duration::from_secs(5)),
    );
    let dispatcher = RequestDispatcher::new(
        DispatcherConfig::default()
            .with_min_query_length(2)
            .with_query_delay(Duration::from_millis(200)),
        source,
        Arc::new(QueryCache::new(CacheConfig::default())),
        Arc::new(PrintSink),
    );

    for text in ["n", "ne", "new"] {
        println!("submitting {text:?}");
        dispatcher.submit(text);
        tokio::time::sleep(Duration::from_millis(80)).await;
    }
    // Wait out the debounce window and the request round trip.
    tokio::time::sleep(Duration::from_secs(2)).await;

    Ok(())
}
