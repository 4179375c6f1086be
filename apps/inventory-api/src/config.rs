//! Configuration for the Inventory API

use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when `DATABASE_URL` is unset; the catalog then lives in memory
    pub database: Option<PostgresConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            database: PostgresConfig::from_env_if_configured()?,
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}
