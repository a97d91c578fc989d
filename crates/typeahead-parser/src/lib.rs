//! Response parsing for the typeahead query pipeline
//!
//! Converts a raw backend payload into records using a declarative schema.
//! Three payload formats are supported, selected by configuration rather
//! than payload sniffing:
//!
//! - **Json**: tagged-record payloads; the schema's container selector is a
//!   dot-separated path to the repeating collection
//! - **Xml**: hierarchical markup; the container selector is a tag name
//! - **DelimitedText**: flat text split on record and field separators

mod delimited;
mod json;
pub mod parser;
mod xml;

pub use parser::{ResponseFormat, ResponseParser};
