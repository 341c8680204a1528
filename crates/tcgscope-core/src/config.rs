use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation core, decoupled from the real environment so it can
/// be tested against a plain `HashMap` lookup. Every variable has a default;
/// the region bounds default to [`RegionBounds::turkey`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    use tcgscope_geo::RegionBounds;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_f64 = |var: &str, default: f64| -> Result<f64, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(default),
            Ok(raw) => raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    let env = parse_environment(&or_default("TCGSCOPE_ENV", "development"));
    let log_level = or_default("TCGSCOPE_LOG_LEVEL", "info");
    let stores_path = PathBuf::from(or_default("TCGSCOPE_STORES_PATH", "./data/stores.json"));

    let defaults = RegionBounds::turkey();
    let region = RegionBounds {
        min_lat: parse_f64("TCGSCOPE_REGION_MIN_LAT", defaults.min_lat)?,
        max_lat: parse_f64("TCGSCOPE_REGION_MAX_LAT", defaults.max_lat)?,
        min_lng: parse_f64("TCGSCOPE_REGION_MIN_LNG", defaults.min_lng)?,
        max_lng: parse_f64("TCGSCOPE_REGION_MAX_LNG", defaults.max_lng)?,
    };

    let location_connective = or_default("TCGSCOPE_LOCATION_CONNECTIVE", " ve ");
    let repair_epsilon_deg = parse_f64("TCGSCOPE_REPAIR_EPSILON_DEG", 0.001)?;

    Ok(AppConfig {
        env,
        log_level,
        stores_path,
        region,
        location_connective,
        repair_epsilon_deg,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
