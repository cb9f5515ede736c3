use crate::config::env::{self, EnvKey};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub storage_root: String,
}

impl AppConfig {
    /// Every key has a default, so a bare environment still yields a
    /// runnable configuration.
    pub fn new() -> Self {
        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            database_url: env::get_or(EnvKey::DatabaseUrl, "sqlite:translation_jobs.db?mode=rwc"),
            storage_root: env::get_or(EnvKey::StorageRoot, "./storage"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
