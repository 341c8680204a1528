//! Geographic primitives for the store catalog: coordinate pairs,
//! great-circle distance, map-URL coordinate extraction, and the
//! deployment-region plausibility check.

pub mod distance;
pub mod extract;
pub mod region;
pub mod types;

pub use distance::{distance_km, format_distance};
pub use extract::{extract_coordinates, ExtractError};
pub use region::RegionBounds;
pub use types::Coordinates;
