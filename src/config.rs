// Runtime configuration loaded from the environment

use std::collections::HashMap;

/// Errors raised while reading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration, built once at startup and injected into the app state
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub cors_origin: String,
    pub db_max_connections: u32,
}

impl Config {
    pub const DEFAULT_DATABASE_URL: &'static str = "sqlite://tasks.db?mode=rwc";
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 4000;
    pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
    pub const DEFAULT_CORS_ORIGIN: &'static str = "http://localhost:5173";
    pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_map(&vars)
    }

    /// Build configuration from a key/value map
    ///
    /// `JWT_SECRET` is the only required key. Everything else falls back to a default.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let jwt_secret = get("JWT_SECRET")
            .ok_or(ConfigError::Missing("JWT_SECRET"))?
            .to_string();

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw.to_string(),
            })?,
            None => Self::DEFAULT_PORT,
        };

        let token_ttl_hours = match get("TOKEN_TTL_HOURS") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(hours) if hours > 0 => hours,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "TOKEN_TTL_HOURS",
                        value: raw.to_string(),
                    })
                }
            },
            None => Self::DEFAULT_TOKEN_TTL_HOURS,
        };

        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DB_MAX_CONNECTIONS",
                        value: raw.to_string(),
                    })
                }
            },
            None => Self::DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: get("DATABASE_URL")
                .unwrap_or(Self::DEFAULT_DATABASE_URL)
                .to_string(),
            host: get("HOST").unwrap_or(Self::DEFAULT_HOST).to_string(),
            port,
            jwt_secret,
            token_ttl_hours,
            cors_origin: get("CORS_ORIGIN")
                .unwrap_or(Self::DEFAULT_CORS_ORIGIN)
                .to_string(),
            db_max_connections,
        })
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
