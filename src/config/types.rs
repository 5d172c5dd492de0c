//! Route configuration types.

use serde::{Deserialize, Serialize};

/// One generically declared endpoint: `GET /{name}` runs `query` verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub name: String,
    pub query: String,
}

impl RouteSpec {
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        RouteSpec {
            name: name.into(),
            query: query.into(),
        }
    }

    /// Axum path for this route.
    pub fn path(&self) -> String {
        format!("/{}", self.name)
    }
}
