use crate::{ConfigStore, LoggingSettings, RawSettings};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub logging: LoggingSettings,
    pub database: DatabaseSettings,
    pub gallery: ConfigStore,
}

/// Everything needed to open a connection pool.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connection: u32,
    pub max_lifetime: Duration,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        let database = DatabaseSettings {
            url: raw.secrets.database_url,
            max_connections: raw.database.max_connections,
            min_connection: raw.database.min_connection,
            max_lifetime: Duration::from_secs(raw.database.max_lifetime),
            idle_timeout: Duration::from_secs(raw.database.idle_timeout),
            acquire_timeout: Duration::from_secs(raw.database.acquire_timeout),
        };

        Self {
            logging: raw.logging,
            database,
            gallery: raw.gallery,
        }
    }
}
