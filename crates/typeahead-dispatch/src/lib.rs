//! Request dispatch for the typeahead pipeline
//!
//! The [`RequestDispatcher`] is the pipeline's entry point. Per submission
//! it extracts the active query from delimited input, gates on a minimum
//! length, debounces rapid keystrokes, then answers from the
//! [`QueryCache`](typeahead_cache::QueryCache) or dispatches to the
//! configured [`ResultSource`](typeahead_source::ResultSource). A
//! monotonically increasing generation token supersedes in-flight work so
//! results are only ever delivered for the most recent submission.

pub mod config;
pub mod dispatcher;
mod extract;
pub mod sink;

pub use config::DispatcherConfig;
pub use dispatcher::RequestDispatcher;
pub use sink::ResultSink;
