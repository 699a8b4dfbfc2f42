//! Startup configuration.
//!
//! Values come from the process environment (after `dotenv` has loaded an
//! optional `.env` file) and are read exactly once in `main`. The resulting
//! [`Config`] is handed to whatever needs it; nothing reads the environment
//! afterwards.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 5)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "REQUEST_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        let max_connections: u32 = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: max_connections.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        let url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Config {
            server: ServerConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                port: parse_or(&lookup, "SERVER_PORT", 8080)?,
                request_timeout: Duration::from_secs(timeout_secs),
            },
            database: DatabaseConfig {
                url,
                max_connections,
                run_migrations: parse_or(&lookup, "DATABASE_MIGRATE", true)?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
            key,
            value: raw,
            reason: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();

        assert_eq!(config.server.env, "development");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.request_timeout, Duration::from_secs(5));
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 5);
        assert!(config.database.run_migrations);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_ENV", "production"),
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "9000"),
            ("REQUEST_TIMEOUT_SECS", "2"),
            ("DATABASE_URL", "sqlite://data/hotels.db"),
            ("DATABASE_MAX_CONNECTIONS", "10"),
            ("DATABASE_MIGRATE", "false"),
        ]))
        .unwrap();

        assert_eq!(config.server.env, "production");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.request_timeout, Duration::from_secs(2));
        assert_eq!(config.database.max_connections, 10);
        assert!(!config.database.run_migrations);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[("DATABASE_URL", "  ")])]
    fn requires_database_url(#[case] pairs: &[(&str, &str)]) {
        let err = Config::from_lookup(lookup_from(pairs)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[rstest]
    #[case("SERVER_PORT", "http")]
    #[case("SERVER_PORT", "70000")]
    #[case("REQUEST_TIMEOUT_SECS", "0")]
    #[case("DATABASE_MAX_CONNECTIONS", "0")]
    #[case("DATABASE_MIGRATE", "yes")]
    fn rejects_invalid_values(#[case] key: &str, #[case] value: &str) {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            (key, value),
        ]))
        .unwrap_err();

        match err {
            ConfigError::Invalid { key: reported, .. } => assert_eq!(reported, key),
            other => panic!("expected invalid value error, got {other:?}"),
        }
    }
}
