//! Shared dispatcher for the hand-written paged routes.

use crate::catalog::PagedRoute;
use crate::error::AppError;
use crate::page::PageWindow;
use crate::service::QueryService;
use crate::sql::{PgBindValue, Variant};
use crate::state::AppState;
use axum::Json;
use serde_json::Value;
use std::collections::HashMap;

/// One inbound request to a paged route: the page window plus the route's filter, if supplied.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryRequest {
    pub window: PageWindow,
    pub filter: Option<PgBindValue>,
}

impl QueryRequest {
    /// Unknown query-string keys are ignored; a declared filter that is absent stays unset.
    pub fn from_params(
        route: &PagedRoute,
        window: PageWindow,
        params: &HashMap<String, String>,
    ) -> Result<Self, AppError> {
        let filter = match route.query.filter {
            Some(spec) => params
                .get(spec.param)
                .map(|raw| PgBindValue::parse(spec.param, spec.kind, raw))
                .transpose()?,
            None => None,
        };
        Ok(QueryRequest { window, filter })
    }

    pub fn variant(&self) -> Variant {
        if self.filter.is_some() {
            Variant::Filtered
        } else {
            Variant::Base
        }
    }

    /// `$1` offset, then `$2` filter when set.
    pub fn params(&self) -> Vec<PgBindValue> {
        let mut params = vec![PgBindValue::I64(self.window.offset)];
        if let Some(f) = &self.filter {
            params.push(f.clone());
        }
        params
    }
}

pub async fn dispatch(
    state: &AppState,
    route: &PagedRoute,
    window: PageWindow,
    params: &HashMap<String, String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let request = QueryRequest::from_params(route, window, params)?;
    let q = route.query.render(request.variant());
    let rows = QueryService::fetch_all(&state.pool, &q.sql, &request.params()).await?;
    Ok(Json(rows))
}
