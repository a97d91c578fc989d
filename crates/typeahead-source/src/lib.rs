//! Result backends for the typeahead pipeline
//!
//! Three interchangeable sources share the [`ResultSource`] contract:
//!
//! - [`ListSource`]: an in-memory record list filtered locally
//! - [`FunctionSource`]: a caller-supplied synchronous function
//! - [`RemoteSource`]: an HTTP endpoint whose payload goes through a
//!   [`ResponseParser`](typeahead_parser::ResponseParser)

pub mod function;
pub mod list;
pub mod remote;
pub mod source;

pub use function::FunctionSource;
pub use list::ListSource;
pub use remote::RemoteSource;
pub use source::ResultSource;
