//! Hand-written paged routes from the catalog.

use crate::catalog::PAGED_ROUTES;
use crate::extractors::Page;
use crate::handlers::paged;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use std::collections::HashMap;

pub fn paged_routes(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new();
    for route in PAGED_ROUTES {
        router = router.route(
            route.path,
            get(
                move |State(state): State<AppState>,
                      Page(window): Page,
                      Query(params): Query<HashMap<String, String>>| async move {
                    paged::dispatch(&state, route, window, &params).await
                },
            ),
        );
    }
    router.with_state(state)
}
