//! Extract the page window from the `:page` path segment.

use crate::error::AppError;
use crate::page::PageWindow;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Rejects with 400 before any handler (and so any query) runs.
#[derive(Clone, Copy, Debug)]
pub struct Page(pub PageWindow);

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        PageWindow::parse(&raw).map(Page)
    }
}
