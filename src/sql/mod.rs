//! Paged query templates: fixed SQL text from code, user values only as bound parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
