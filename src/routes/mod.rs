//! Router builders.

pub mod configured;
pub mod paged;

pub use configured::configured_routes;
pub use paged::paged_routes;
