use crate::ConfigStore;
use serde::Deserialize;

/// Settings exactly as they appear in `config/settings.yaml` and the environment.
#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub logging: LoggingSettings,
    pub secrets: SecretSettings,
    pub database: RawDatabaseSettings,
    /// Gallery behaviour. Missing keys fall back to their documented defaults.
    #[serde(default)]
    pub gallery: ConfigStore,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecretSettings {
    pub database_url: String,
}

/// Database connection pool configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct RawDatabaseSettings {
    pub max_connections: u32,
    pub min_connection: u32,
    pub max_lifetime: u64,
    pub idle_timeout: u64,
    pub acquire_timeout: u64,
}
