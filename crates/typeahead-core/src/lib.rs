//! Core data model for the typeahead query pipeline
//!
//! Defines the record and schema types shared by every other crate in the
//! workspace, the pure match engine used for local filtering, and the
//! pipeline-wide error type.

pub mod error;
pub mod filter;
pub mod record;
pub mod schema;

pub use error::{Result, TypeaheadError};
pub use filter::{filter, MatchOptions};
pub use record::Record;
pub use schema::Schema;
