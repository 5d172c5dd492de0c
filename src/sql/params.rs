//! Filter values parsed from the query string and bound to a sqlx query.

use crate::error::AppError;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;

/// How a filter's raw query-string value is typed before binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Text,
    Integer,
}

/// A value that can be bound to a PostgreSQL query.
#[derive(Clone, Debug, PartialEq)]
pub enum PgBindValue {
    I64(i64),
    String(String),
}

impl PgBindValue {
    /// Type a raw query-string value. Empty text is a real value, not "unset".
    pub fn parse(param: &str, kind: FilterKind, raw: &str) -> Result<Self, AppError> {
        Ok(match kind {
            FilterKind::Text => PgBindValue::String(raw.to_string()),
            FilterKind::Integer => {
                let n: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("{} must be an integer, got '{}'", param, raw)))?;
                PgBindValue::I64(n)
            }
        })
    }

    pub fn bind_to<'q>(&self, query: Query<'q, Postgres, PgArguments>) -> Query<'q, Postgres, PgArguments> {
        match self {
            PgBindValue::I64(n) => query.bind(*n),
            PgBindValue::String(s) => query.bind(s.clone()),
        }
    }
}
