//! HTTP handler bodies for configured and paged routes.

pub mod configured;
pub mod paged;
