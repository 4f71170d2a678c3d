//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod database;
pub mod filter;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::ServerConfig;
pub use self::database::DatabaseConfig;
pub use self::filter::FilterConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// files (default.toml + environment overlay) and `QUERYFILTER__*`
/// environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Filtering, sorting and pagination defaults.
    #[serde(default)]
    pub filter: FilterConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default` with the `config/{env}` overlay and
    /// environment variables prefixed with `QUERYFILTER__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("QUERYFILTER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        tracing::debug!(env, "Configuration sources merged");

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse a configuration from a TOML string, without file or
    /// environment sources.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::sorting::SortDirection;

    #[test]
    fn test_from_toml_with_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [database]
            url = "postgres://localhost/app"

            [filter]
            default_sort_field = "id"
            max_limit = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.database.url, "postgres://localhost/app");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.filter.default_sort_field, "id");
        assert_eq!(config.filter.default_sort_direction, SortDirection::Desc);
        assert_eq!(config.filter.max_limit, 50);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_database_url_is_configuration_error() {
        let err = AppConfig::from_toml("[server]\nport = 9000\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
