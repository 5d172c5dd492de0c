//! Traffic API: read-only paginated JSON endpoints over the traffic/weather dataset.
//!
//! Two families of routes: generic ones manufactured from an endpoints file
//! (`GET /{name}` runs a fixed query), and hand-written paged routes that pick a
//! base or filtered statement depending on the query string.

pub mod catalog;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

pub use catalog::{PagedRoute, PAGED_ROUTES};
pub use config::{load_routes_from_path, load_routes_from_str, AppConfig, RouteSpec};
pub use error::{AppError, ConfigError};
pub use page::{PageWindow, PAGE_SIZE};
pub use routes::{configured_routes, paged_routes};
pub use service::QueryService;
pub use state::AppState;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application router: configured and paged routes behind request tracing.
pub fn app(state: AppState, specs: &[RouteSpec]) -> Router {
    Router::new()
        .merge(configured_routes(state.clone(), specs))
        .merge(paged_routes(state))
        .layer(TraceLayer::new_for_http())
}
