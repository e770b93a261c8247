pub mod config;
pub mod geo;
pub mod types;
pub mod utils;

pub use config::{
    build_config, load_config, validate_config, AppConfig, GoogleMapsConfig, LogFormat,
    LoggingConfig, ServerConfig, API_KEY_ENV,
};
pub use geo::{haversine_km, initial_bearing};
pub use types::*;
pub use utils::*;
