//! Incremental Search Example
//!
//! Drives the full pipeline against an in-memory list source: keystroke
//! submissions, debouncing, delimiter handling, and cache reuse.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use typeahead_cache::{CacheConfig, QueryCache};
use typeahead_demos::{init_tracing, PrintSink};
use typeahead_dispatch::{DispatcherConfig, RequestDispatcher};
use typeahead_source::ListSource;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    println!("=== Incremental Search Example ===\n");

    let source = Arc::new(ListSource::from_keys([
        "alabama",
        "alaska",
        "arizona",
        "arkansas",
        "california",
        "colorado",
        "connecticut",
    ]));
    let cache = Arc::new(QueryCache::new(
        CacheConfig::default().with_subset_matching(true),
    ));
    let dispatcher = RequestDispatcher::new(
        DispatcherConfig::default()
            .with_min_query_length(2)
            .with_query_delay(Duration::from_millis(50))
            .with_delimiters(vec![',']),
        source,
        Arc::clone(&cache),
        Arc::new(PrintSink),
    );

    // A burst of keystrokes; only the last survives the debounce window.
    println!("--- Typing \"ala\" one keystroke at a time ---\n");
    for text in ["a", "al", "ala"] {
        dispatcher.submit(text);
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Narrowing the query is answered from the cached "ala" entry.
    println!("\n--- Narrowing to \"alas\" (subset cache hit) ---\n");
    dispatcher.submit("alas");
    tokio::time::sleep(Duration::from_millis(100)).await;

    // A delimited submission searches only the segment after the comma.
    println!("\n--- Delimited input \"alaska, ar\" ---\n");
    dispatcher.submit("alaska, ar");
    tokio::time::sleep(Duration::from_millis(100)).await;
    println!(
        "retained prefix: {:?}",
        dispatcher.retained_prefix().unwrap_or_default()
    );

    let stats = cache.stats();
    println!(
        "\ncache: {} entries, {} hits ({} subset), {} misses, hit rate {:.0}%",
        stats.entry_count(),
        stats.hits(),
        stats.subset_hits(),
        stats.misses(),
        stats.hit_rate() * 100.0
    );

    println!("\n=== Example completed! ===");
    Ok(())
}
