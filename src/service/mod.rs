//! Query execution and row serialization.

pub mod query;

pub use query::QueryService;
