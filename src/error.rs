//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Startup-time failures. Never produced while serving requests.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),
    #[error("invalid value for {name}: {reason}")]
    InvalidEnv { name: &'static str, reason: String },
    #[error("config load: {0}")]
    Load(String),
    #[error("invalid route name '{0}'")]
    InvalidRouteName(String),
    #[error("duplicate route: {0}")]
    DuplicateRoute(String),
    #[error("route '{name}' would shadow the paged route /{prefix}/:page")]
    ShadowsPagedRoute { name: String, prefix: String },
    #[error("route '{0}' has an empty query")]
    EmptyQuery(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::BadRequest(_) => ("bad_request", self.to_string()),
            AppError::Db(e) => {
                tracing::error!(error = %e, "query failed");
                ("database_error", "internal server error".to_string())
            }
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}
