//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and `RECORDHUB__`-prefixed environment variables.
//! Every field has a default, so an empty source yields a runnable config.

pub mod app;
pub mod logging;
pub mod resource;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::resource::{ResourceConfig, ResourcesConfig};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Per-resource listener settings.
    #[serde(default)]
    pub resources: ResourcesConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, `config/{env}.toml` and environment
    /// variables prefixed with `RECORDHUB__` (double underscore separates
    /// nested keys), in that order.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Same as [`AppConfig::load`] with an explicit configuration directory.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("RECORDHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Forces seed fixtures on for every resource.
    pub fn with_seed_fixtures(mut self) -> Self {
        self.resources.coffee.seed_fixtures = true;
        self.resources.employee.seed_fixtures = true;
        self.resources.flight.seed_fixtures = true;
        self
    }
}
