//! Query result cache for the typeahead pipeline
//!
//! A bounded, recency-ordered store of `(query, results)` entries that can
//! answer a lookup two ways:
//!
//! - **Exact**: the normalized incoming query equals a stored query
//! - **Subset**: a left-substring of the incoming query equals a stored
//!   query, in which case the broader cached result set is re-filtered
//!   locally instead of contacting the backend
//!
//! Subset reuse is only valid when the backend returns a superset of
//! results for shorter queries; callers opt in via
//! [`CacheConfig::with_subset_matching`].

pub mod cache;
pub mod config;
pub mod stats;

pub use cache::{CacheEntry, QueryCache};
pub use config::CacheConfig;
pub use stats::CacheStats;
