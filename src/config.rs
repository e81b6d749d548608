//! Server configuration loaded from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DATABASE_URL` | unset | `PostgreSQL` connection string; in-memory storage when unset |
//! | `DATABASE_POOL_SIZE` | `8` | maximum pooled connections |
//! | `APPLY_SCHEMA` | `true` | create the `task_lists` table at startup |
//! | `APP_HOST` | `0.0.0.0` | listen address |
//! | `APP_PORT` | `8080` | listen port |

use std::str::FromStr;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 8;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set to a value that cannot be used.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// Name of the variable.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Runtime settings for the task list server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `PostgreSQL` connection string, if persistent storage is configured.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub database_pool_size: u32,
    /// Whether to apply the bundled schema at startup.
    pub apply_schema: bool,
    /// Listen address.
    pub app_host: String,
    /// Listen port.
    pub app_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            database_pool_size: DEFAULT_POOL_SIZE,
            apply_schema: true,
            app_host: DEFAULT_HOST.to_owned(),
            app_port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment, reading a `.env`
    /// file first when one exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            tracing::warn!(error = %err, "ignoring unreadable .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let database_pool_size =
            parse_optional(&lookup, "DATABASE_POOL_SIZE", defaults.database_pool_size)?;
        if database_pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_POOL_SIZE".to_owned(),
                message: "must be greater than 0".to_owned(),
            });
        }

        Ok(Self {
            database_url,
            database_pool_size,
            apply_schema: parse_flag(&lookup, "APPLY_SCHEMA", defaults.apply_schema)?,
            app_host: lookup("APP_HOST").unwrap_or(defaults.app_host),
            app_port: parse_optional(&lookup, "APP_PORT", defaults.app_port)?,
        })
    }

    /// Returns the `host:port` pair to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

fn parse_optional<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|err: T::Err| ConfigError::InvalidValue {
            key: key.to_owned(),
            message: err.to_string(),
        })
    })
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_owned(),
            message: format!("expected a boolean, got '{raw}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key: &str| values.get(key).cloned()
    }

    #[rstest]
    fn empty_environment_yields_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).expect("defaults should parse");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[rstest]
    fn all_variables_are_read() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/tasklists"),
            ("DATABASE_POOL_SIZE", "3"),
            ("APPLY_SCHEMA", "false"),
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "9000"),
        ]))
        .expect("configuration should parse");

        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/tasklists")
        );
        assert_eq!(config.database_pool_size, 3);
        assert!(!config.apply_schema);
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[rstest]
    fn blank_database_url_means_in_memory_storage() {
        let config = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")]))
            .expect("configuration should parse");
        assert_eq!(config.database_url, None);
    }

    #[rstest]
    #[case("APP_PORT", "not-a-port")]
    #[case("APP_PORT", "70000")]
    #[case("DATABASE_POOL_SIZE", "0")]
    #[case("DATABASE_POOL_SIZE", "-2")]
    #[case("APPLY_SCHEMA", "maybe")]
    fn invalid_values_are_rejected(#[case] key: &str, #[case] value: &str) {
        let result = AppConfig::from_lookup(lookup_from(&[(key, value)]));
        assert!(
            matches!(result, Err(ConfigError::InvalidValue { key: ref rejected, .. }) if rejected == key),
            "expected {key}={value} to be rejected, got {result:?}"
        );
    }
}
