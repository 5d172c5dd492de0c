//! Route spec validation: names usable as URL paths, unique, not shadowing paged routes.

use crate::catalog::PAGED_ROUTES;
use crate::config::RouteSpec;
use crate::error::ConfigError;
use regex::Regex;
use std::collections::HashSet;

const ROUTE_NAME_PATTERN: &str = r"^[A-Za-z0-9_-]+(/[A-Za-z0-9_-]+)*$";

pub fn validate(routes: &[RouteSpec]) -> Result<(), ConfigError> {
    let name_re = Regex::new(ROUTE_NAME_PATTERN).map_err(|e| ConfigError::Load(format!("route name pattern: {}", e)))?;
    let mut seen = HashSet::new();
    for route in routes {
        if !name_re.is_match(&route.name) {
            return Err(ConfigError::InvalidRouteName(route.name.clone()));
        }
        if let Some(prefix) = shadowed_paged_prefix(&route.name) {
            return Err(ConfigError::ShadowsPagedRoute {
                name: route.name.clone(),
                prefix: prefix.to_string(),
            });
        }
        if route.query.trim().is_empty() {
            return Err(ConfigError::EmptyQuery(route.name.clone()));
        }
        if !seen.insert(route.name.as_str()) {
            return Err(ConfigError::DuplicateRoute(route.name.clone()));
        }
    }
    Ok(())
}

/// A static path like `traffic/0` would win over `/traffic/:page` for that page.
/// A bare `traffic` is a distinct path and stays allowed.
fn shadowed_paged_prefix(name: &str) -> Option<&'static str> {
    let (first, _) = name.split_once('/')?;
    PAGED_ROUTES
        .iter()
        .filter_map(|r| r.path.trim_start_matches('/').split('/').next())
        .find(|prefix| *prefix == first)
}
