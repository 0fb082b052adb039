//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub dashboard: DashboardSettings,
    pub logging: LoggingSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

/// Which adapter serves the repository ports.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub backend: BackendKind,
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoleSetting {
    Admin,
    Viewer,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    /// Role applied to requests that do not carry an explicit role header.
    pub default_role: RoleSetting,
    pub notification_capacity: usize,
    /// Open wizard sessions kept at once; the least recently used is evicted.
    pub max_wizard_sessions: usize,
    /// Idle time after which an abandoned wizard session is dropped.
    pub wizard_session_ttl_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub filter: String,
    pub format: LogFormat,
    /// Directory for daily rolling log files. Stdout only when unset.
    pub directory: Option<String>,
    pub file_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }

    /// Configuration built from defaults only, without touching files or the
    /// process environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "wps-server")?
            .set_default("database.backend", "memory")?
            .set_default("database.url", "postgres://localhost/workplace_strategy")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_secs", 3)?
            .set_default("database.run_migrations", true)?
            .set_default("dashboard.default_role", "admin")?
            .set_default(
                "dashboard.notification_capacity",
                crate::constants::DEFAULT_NOTIFICATION_CAPACITY as i64,
            )?
            .set_default(
                "dashboard.max_wizard_sessions",
                crate::constants::DEFAULT_MAX_WIZARD_SESSIONS as i64,
            )?
            .set_default(
                "dashboard.wizard_session_ttl_secs",
                crate::constants::DEFAULT_WIZARD_SESSION_TTL_SECS as i64,
            )?
            .set_default("logging.filter", "info,wps_core=debug,wps_api=debug")?
            .set_default("logging.format", "json")?
            .set_default("logging.file_prefix", "wps-server.log")?
            .set_default("cors.allowed_origins", vec!["http://localhost:5173"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config = AppConfig::defaults().unwrap();
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.database.backend, BackendKind::Memory);
        assert_eq!(config.dashboard.default_role, RoleSetting::Admin);
        assert_eq!(config.dashboard.max_wizard_sessions, 100);
        assert_eq!(config.dashboard.wizard_session_ttl_secs, 1800);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.logging.directory.is_none());
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:5173".to_string()]);
    }
}
