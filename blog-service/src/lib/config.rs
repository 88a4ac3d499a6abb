use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub jwt_secret: String,
}

impl Config {
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE_URL, PORT, JWT_SECRET, ...)
    /// 2. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// A `.env` file in the working directory is read into the environment
    /// first, if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("port", Self::DEFAULT_PORT)?
            .set_default("database_max_connections", Self::DEFAULT_MAX_CONNECTIONS)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // DATABASE_URL overrides database_url, PORT overrides port
            .add_source(Environment::default().try_parsing(true))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        if config.jwt_secret.is_empty() {
            return Err(ConfigError::Message("jwt_secret must not be empty".to_string()));
        }

        Ok(config)
    }
}
