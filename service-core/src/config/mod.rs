use crate::error::AppError;
use config::builder::DefaultState;
use config::{Config as Cfg, ConfigBuilder, Environment, File};
use serde::Deserialize;

/// Settings shared by every service: where the HTTP listener binds.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Load from an optional `configuration` file, then `APP__*` environment variables.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_builder(
            Cfg::builder()
                .add_source(File::with_name("configuration").required(false))
                .add_source(Environment::with_prefix("APP").separator("__")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
