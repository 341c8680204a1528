use std::path::PathBuf;

use tcgscope_geo::RegionBounds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Path of the persisted store collection.
    pub stores_path: PathBuf,
    /// Plausibility bounds for extracted coordinates.
    pub region: RegionBounds,
    /// Connective token marking a compound location in `location` text.
    pub location_connective: String,
    /// Per-axis drift (degrees) above which the repair pass overwrites a
    /// stored coordinate.
    pub repair_epsilon_deg: f64,
}
