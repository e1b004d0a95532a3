use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub observability: ObservabilityConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    pub service_name: String,
    pub log_level: String,
    /// OTLP collector for trace export. Unset means local JSON logs only.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Browser origins allowed to read the feed. Empty allows any origin.
    pub allowed_origins: Vec<String>,
}

impl NotificationConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let allowed_origins = match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(val) => parse_origins(&val),
            Err(_) if is_prod => {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "CORS_ALLOWED_ORIGINS is required in production but not set"
                )))
            }
            Err(_) => Vec::new(),
        };

        if is_prod
            && (allowed_origins.is_empty() || allowed_origins.iter().any(|origin| origin == "*"))
        {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "CORS_ALLOWED_ORIGINS must list explicit origins in production"
            )));
        }

        Ok(NotificationConfig {
            common: common_config,
            observability: ObservabilityConfig {
                service_name: get_env("SERVICE_NAME", "notification-service"),
                log_level: get_env("LOG_LEVEL", "info"),
                otlp_endpoint: env::var("OTLP_ENDPOINT")
                    .ok()
                    .filter(|endpoint| !endpoint.trim().is_empty()),
            },
            cors: CorsConfig { allowed_origins },
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
