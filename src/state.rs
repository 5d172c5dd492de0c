//! Shared application state for all routes.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    /// Constructed once before serving; every request checks a connection out of it.
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState { pool }
    }
}
