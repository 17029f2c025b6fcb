//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files, `WORKOUT__`-prefixed environment variables, and the flat
//! variables of earlier deployments (`JWT_SECRET`, `DATABASE_URL`, ...).
//! Each sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod mail;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, RateLimitConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::mail::{MailConfig, MailProvider};

use crate::error::AppError;

/// Flat environment variables honoured for compatibility, and the keys they override.
const LEGACY_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("JWT_SECRET", "auth.jwt_secret"),
    ("JWT_EXPIRATION_TIME", "auth.token_ttl_hours"),
    ("DATABASE_URL", "database.url"),
    ("APP_URL", "mail.app_url"),
    ("PORT", "server.port"),
];

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Authentication settings.
    pub auth: AuthConfig,
    /// Outbound mail settings.
    #[serde(default)]
    pub mail: MailConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, `config/{env}.toml`, environment
    /// variables prefixed with `WORKOUT__`, and finally the legacy flat
    /// variables. The result is validated before it is returned.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("WORKOUT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        for (var, key) in LEGACY_ENV_OVERRIDES {
            let value = std::env::var(var).ok().filter(|v| !v.trim().is_empty());
            builder = builder
                .set_override_option(*key, value)
                .map_err(|e| AppError::configuration(format!("Failed to apply {var}: {e}")))?;
        }

        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        Self::from_source(config)
    }

    /// Deserialize and validate an already-assembled configuration source.
    pub fn from_source(source: config::Config) -> Result<Self, AppError> {
        let config: Self = source
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would silently weaken the auth core.
    pub fn validate(&self) -> Result<(), AppError> {
        self.auth.validate()?;
        self.mail.validate()?;

        if self.database.url.trim().is_empty() {
            return Err(AppError::configuration("database.url (DATABASE_URL) is required"));
        }
        Ok(())
    }
}
