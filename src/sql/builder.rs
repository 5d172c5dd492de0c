//! Renders a paged SELECT from a per-route template.
//!
//! Parameter layout is fixed: `$1` is the row offset, `$2` the filter value when the
//! filtered variant is selected. Base and filtered variants come from the same template,
//! so they always share a projection.

use crate::page::PAGE_SIZE;
use crate::sql::FilterKind;

/// Comparison used by a filter predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    /// PostgreSQL POSIX regex match (`~`).
    Regex,
}

impl FilterOp {
    fn as_sql(self) -> &'static str {
        match self {
            FilterOp::Eq => "=",
            FilterOp::Regex => "~",
        }
    }
}

/// The single optional filter a paged route accepts.
#[derive(Clone, Copy, Debug)]
pub struct FilterSpec {
    /// Query-string parameter name.
    pub param: &'static str,
    /// Column or expression the predicate compares against.
    pub column: &'static str,
    pub op: FilterOp,
    pub kind: FilterKind,
}

/// A paged route's SQL template.
#[derive(Clone, Copy, Debug)]
pub struct PagedQuery {
    /// `SELECT ... FROM ... [JOIN ...]` without WHERE / GROUP BY / ORDER BY / LIMIT.
    pub select: &'static str,
    pub filter: Option<FilterSpec>,
    pub group_by: Option<&'static str>,
    pub order_by: Option<&'static str>,
}

/// Which of the two statement variants to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Base,
    Filtered,
}

pub struct QueryBuf {
    pub sql: String,
}

impl PagedQuery {
    /// Render the base or filtered statement. Asking for `Filtered` on a route without a
    /// filter yields the base statement.
    pub fn render(&self, variant: Variant) -> QueryBuf {
        let mut sql = self.select.trim().to_string();
        if let (Variant::Filtered, Some(f)) = (variant, self.filter) {
            sql.push_str(&format!(" WHERE {} {} $2", f.column, f.op.as_sql()));
        }
        if let Some(g) = self.group_by {
            sql.push_str(&format!(" GROUP BY {}", g));
        }
        if let Some(o) = self.order_by {
            sql.push_str(&format!(" ORDER BY {}", o));
        }
        sql.push_str(&format!(" LIMIT {} OFFSET $1", PAGE_SIZE));
        QueryBuf { sql }
    }
}
