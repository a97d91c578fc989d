use thiserror::Error;

/// Errors surfaced by the query pipeline.
///
/// Each variant maps to one consumer-visible failure kind. All of them are
/// reported once and treated as zero results; the pipeline never retries.
#[derive(Error, Debug)]
pub enum TypeaheadError {
    #[error("Null response: backend returned no payload")]
    NullResponse,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Source error: {0}")]
    SourceError(String),
}

pub type Result<T> = std::result::Result<T, TypeaheadError>;
