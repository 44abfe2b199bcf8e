//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_SESSION_TTL_SECONDS, PRODUCTION_ENV, SESSION_COOKIE_NAME};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub session: SessionSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub ttl_seconds: i64,
    pub cookie_name: String,
}

/// Cross-origin deployment. When `origin` is set the session cookie must be
/// usable cross-site, which forces `SameSite=None` and `Secure`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsSettings {
    pub origin: Option<String>,
}

impl AppConfig {
    /// Defaults, then `config/default`, then `config/{APP_ENV}`, then
    /// environment variables (`DATABASE__URL`, `SESSION__TTL_SECONDS`, ...).
    /// `APP_ENV`, `DATABASE_URL` and `CORS_ORIGIN` are honoured as well.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .set_override("app.env", env)?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("cors.origin", non_empty_env("CORS_ORIGIN"))?
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default("app.env", "development")?
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "notes-server")?
            .set_default("database.max_connections", 10)?
            .set_default("database.acquire_timeout_seconds", 3)?
            .set_default("database.run_migrations", true)?
            .set_default("session.ttl_seconds", DEFAULT_SESSION_TTL_SECONDS)?
            .set_default("session.cookie_name", SESSION_COOKIE_NAME)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.session.ttl_seconds <= 0 {
            return Err(AppError::InvalidConfig(
                "session.ttl_seconds must be positive".to_string(),
            ));
        }
        if self.session.cookie_name.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "session.cookie_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app.env == PRODUCTION_ENV
    }

    pub fn is_cross_origin(&self) -> bool {
        self.cors
            .origin
            .as_deref()
            .map(|o| !o.trim().is_empty())
            .unwrap_or(false)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
