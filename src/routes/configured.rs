//! Routes manufactured from the endpoints file: one `GET /{name}` per spec.

use crate::config::RouteSpec;
use crate::handlers::configured;
use crate::state::AppState;
use axum::{extract::State, routing::get, Router};
use std::sync::Arc;

/// Each handler owns an immutable copy of its spec; nothing is shared between routes.
pub fn configured_routes(state: AppState, specs: &[RouteSpec]) -> Router {
    let mut router: Router<AppState> = Router::new();
    for spec in specs {
        let path = spec.path();
        let spec = Arc::new(spec.clone());
        tracing::info!(route = %path, "registering configured route");
        router = router.route(
            &path,
            get(move |State(state): State<AppState>| {
                let spec = Arc::clone(&spec);
                async move { configured::run(&state, &spec).await }
            }),
        );
    }
    router.with_state(state)
}
