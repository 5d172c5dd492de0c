//! Load route specs from a YAML mapping of `route_name: sql`.

use crate::config::{validate, RouteSpec};
use crate::error::ConfigError;
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Read and parse the endpoints file. Any failure is fatal at startup.
pub async fn load_routes_from_path(path: impl AsRef<Path>) -> Result<Vec<RouteSpec>, ConfigError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    load_routes_from_str(&raw)
}

/// Parse a YAML document into route specs in document order, then validate them.
pub fn load_routes_from_str(raw: &str) -> Result<Vec<RouteSpec>, ConfigError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let doc: Value = serde_yaml::from_str(raw).map_err(|e| ConfigError::Load(e.to_string()))?;
    let mapping = match doc {
        Value::Null => Mapping::new(),
        Value::Mapping(m) => m,
        _ => return Err(ConfigError::Load("top level must be a mapping of route name to query".into())),
    };

    let mut routes = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let name = match key {
            Value::String(s) => s,
            other => return Err(ConfigError::Load(format!("route name must be a string, got {:?}", other))),
        };
        let query = match value {
            Value::String(s) => s,
            _ => return Err(ConfigError::Load(format!("query for route '{}' must be a string", name))),
        };
        let name = name.trim().trim_start_matches('/').to_string();
        routes.push(RouteSpec::new(name, query));
    }

    validate(&routes)?;
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_routes_in_document_order() {
        let raw = "roads: SELECT * FROM roads\n/cities: |\n  SELECT DISTINCT city\n  FROM roads\n";
        let routes = load_routes_from_str(raw).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0], RouteSpec::new("roads", "SELECT * FROM roads"));
        assert_eq!(routes[1].name, "cities");
        assert_eq!(routes[1].path(), "/cities");
        assert!(routes[1].query.contains("DISTINCT city"));
    }

    #[test]
    fn empty_document_has_no_routes() {
        assert!(load_routes_from_str("").unwrap().is_empty());
        assert!(load_routes_from_str("   \n").unwrap().is_empty());
        assert!(load_routes_from_str("~").unwrap().is_empty());
    }

    #[test]
    fn rejects_sequence_document() {
        let err = load_routes_from_str("- SELECT 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn rejects_non_string_query() {
        let err = load_routes_from_str("roads: 42\n").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = load_routes_from_str("roads: SELECT 1\nroads: SELECT 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn leading_slash_duplicates_are_rejected() {
        let err = load_routes_from_str("roads: SELECT 1\n/roads: SELECT 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateRoute(name) if name == "roads"));
    }

    #[test]
    fn malformed_yaml_fails() {
        let err = load_routes_from_str("roads: [unclosed\n").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[tokio::test]
    async fn missing_file_fails() {
        let err = load_routes_from_path("/nonexistent/endpoints.yaml").await.unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
