//! Domain types and configuration for the store catalog.

pub mod app_config;
pub mod cities;
pub mod config;
pub mod products;
pub mod store;

pub use app_config::{AppConfig, Environment};
pub use cities::{cities, preset_coordinates, CITY_PRESETS};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{Availability, ProductKey, ProductShelf};
pub use store::Store;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
