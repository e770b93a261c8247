use crate::types::AttractionsError;
use crate::utils::{validate_language, validate_place_type, validate_radius};
use anyhow::Result;
use config::{Config, Environment, File};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Environment variable carrying the Google Maps Platform credential.
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub google_maps: GoogleMapsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleMapsConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub default_language: String,
    pub default_radius_m: u32,
    pub default_place_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Fallback filter when `RUST_LOG` is unset.
    pub filter: String,
}

pub fn load_config() -> Result<AppConfig> {
    // Pick up a local .env file if present
    dotenv().ok();

    let env_name = env::var("ENV").unwrap_or_else(|_| "development".to_string());
    let api_key = env::var(API_KEY_ENV).ok();

    build_config(Path::new("config"), &env_name, api_key)
}

/// Layers defaults, `{dir}/default.*`, `{dir}/{env_name}.*`, `APP__*`
/// variables and finally the API key.
pub fn build_config(config_dir: &Path, env_name: &str, api_key: Option<String>) -> Result<AppConfig> {
    let default_file = config_dir.join("default");
    let env_file = config_dir.join(env_name);

    let settings = Config::builder()
        .add_source(Config::try_from(&AppConfig::default())?)
        .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_file.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("google_maps.api_key", api_key)?
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;
    config.google_maps.api_key = config.google_maps.api_key.trim().to_string();

    validate_config(&config)?;

    Ok(config)
}

pub fn validate_config(config: &AppConfig) -> std::result::Result<(), AttractionsError> {
    if config.google_maps.api_key.is_empty() {
        return Err(AttractionsError::Config(format!(
            "{} is not set; export it or add it to .env before starting the service",
            API_KEY_ENV
        )));
    }

    if config.server.port == 0 {
        return Err(AttractionsError::Config("server.port cannot be 0".to_string()));
    }

    if config.google_maps.timeout_secs == 0 {
        return Err(AttractionsError::Config(
            "google_maps.timeout_secs must be at least 1".to_string(),
        ));
    }

    if config.google_maps.base_url.trim().is_empty() {
        return Err(AttractionsError::Config(
            "google_maps.base_url cannot be empty".to_string(),
        ));
    }

    validate_radius(config.google_maps.default_radius_m)
        .and_then(|_| validate_language(&config.google_maps.default_language))
        .and_then(|_| validate_place_type(&config.google_maps.default_place_type))
        .map_err(|e| AttractionsError::Config(format!("invalid search defaults: {}", e)))?;

    Ok(())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            google_maps: GoogleMapsConfig {
                api_key: String::new(),
                base_url: "https://maps.googleapis.com".to_string(),
                timeout_secs: 10,
                default_language: "pl".to_string(),
                default_radius_m: 2000,
                default_place_type: "tourist_attraction".to_string(),
            },
            logging: LoggingConfig {
                format: LogFormat::Compact,
                filter: "attractions_api=info,tower_http=info".to_string(),
            },
        }
    }
}
