//! Bounding-box plausibility check for coordinates.
//!
//! Flags coordinates that are syntactically valid but geographically
//! implausible for the deployment's target country. A soft signal: callers
//! warn on out-of-region values, they never discard them.

/// Inclusive latitude/longitude bounds for a deployment region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl RegionBounds {
    /// Turkey with a small margin. The default deployment region.
    #[must_use]
    pub fn turkey() -> Self {
        Self {
            min_lat: 35.5,
            max_lat: 42.5,
            min_lng: 25.5,
            max_lng: 45.0,
        }
    }

    /// Whether the pair falls inside the bounds. Boundary values count as
    /// inside.
    #[must_use]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_interior_point() {
        // Ankara
        assert!(RegionBounds::turkey().contains(39.9334, 32.8597));
    }

    #[test]
    fn boundary_values_are_inside() {
        let bounds = RegionBounds::turkey();
        assert!(bounds.contains(35.5, 25.5));
        assert!(bounds.contains(42.5, 45.0));
        assert!(bounds.contains(35.5, 45.0));
    }

    #[test]
    fn one_degree_outside_any_bound_is_rejected() {
        let bounds = RegionBounds::turkey();
        assert!(!bounds.contains(34.5, 30.0));
        assert!(!bounds.contains(43.5, 30.0));
        assert!(!bounds.contains(40.0, 24.5));
        assert!(!bounds.contains(40.0, 46.0));
    }

    #[test]
    fn custom_bounds_are_respected() {
        let bounds = RegionBounds {
            min_lat: -1.0,
            max_lat: 1.0,
            min_lng: -1.0,
            max_lng: 1.0,
        };
        assert!(bounds.contains(0.0, 0.0));
        assert!(!bounds.contains(39.9334, 32.8597));
    }
}
