//! Handler body for routes declared in the endpoints file.

use crate::config::RouteSpec;
use crate::error::AppError;
use crate::service::QueryService;
use crate::state::AppState;
use axum::Json;
use serde_json::Value;

/// Execute the route's query verbatim, no bound parameters, and return every row.
pub async fn run(state: &AppState, spec: &RouteSpec) -> Result<Json<Vec<Value>>, AppError> {
    let rows = QueryService::fetch_all(&state.pool, &spec.query, &[]).await?;
    Ok(Json(rows))
}
