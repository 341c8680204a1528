//! Great-circle distance between coordinate pairs.

use crate::types::Coordinates;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinate pairs, in kilometres.
///
/// Symmetric, zero for equal inputs. NaN in either input propagates to the
/// result; validating the numbers is the caller's job.
#[must_use]
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + (d_lng / 2.0).sin().powi(2) * lat_a.cos() * lat_b.cos();
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Render a distance for display: rounded metres below one kilometre,
/// one-decimal kilometres otherwise.
#[must_use]
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else {
        format!("{km:.1} km")
    }
}
