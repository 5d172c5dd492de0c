//! Process settings read from the environment (and `.env` via dotenvy).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ENDPOINTS_PATH: &str = "endpoints.yaml";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub endpoints_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingEnv("DATABASE_URL"))?;
        let database_url = normalize_database_url(database_url.trim());

        let endpoints_path = lookup("ENDPOINTS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ENDPOINTS_PATH));

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_addr.parse::<SocketAddr>().map_err(|e| ConfigError::InvalidEnv {
            name: "BIND_ADDR",
            reason: e.to_string(),
        })?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => match v.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        name: "DATABASE_MAX_CONNECTIONS",
                        reason: format!("expected a positive integer, got '{}'", v),
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(AppConfig {
            database_url,
            endpoints_path,
            bind_addr,
            max_connections,
        })
    }
}

/// Accept either a full `postgres://` / `postgresql://` URL or a bare `user:pass@host/db`.
pub fn normalize_database_url(url: &str) -> String {
    if url.starts_with("postgres") {
        url.to_string()
    } else {
        format!("postgresql://{}", url)
    }
}
