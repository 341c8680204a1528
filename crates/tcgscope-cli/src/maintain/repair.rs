//! The repair pass: re-extract every stored map link and overwrite
//! coordinates that drifted, flagging anything outside the deployment
//! region.

use tcgscope_core::Store;
use tcgscope_geo::{extract_coordinates, Coordinates, RegionBounds};

/// One overwritten coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct RepairChange {
    pub id: u32,
    pub name: String,
    pub old: Option<Coordinates>,
    pub new: Coordinates,
}

/// Outcome of a repair pass.
#[derive(Debug, Default, PartialEq)]
pub(super) struct RepairReport {
    pub changes: Vec<RepairChange>,
    /// Names of stores whose (new or pre-existing) coordinates fall
    /// outside the region bounds. Flagged, never altered or discarded.
    pub suspect: Vec<String>,
}

/// Re-run extraction against every record's stored map link and overwrite
/// the coordinates whenever either axis drifts by more than `epsilon_deg`.
///
/// Links that yield no match are left alone; extraction errors skip the
/// record with a warning. Running the pass twice in a row on a consistent
/// dataset changes nothing the second time.
pub(super) fn repair_coordinates(
    stores: &mut [Store],
    bounds: &RegionBounds,
    epsilon_deg: f64,
) -> RepairReport {
    let mut report = RepairReport::default();

    for store in stores.iter_mut() {
        let Some(url) = store.maps_url.clone() else {
            continue;
        };

        match extract_coordinates(&url) {
            Ok(Some(extracted)) => {
                let old = store.coordinates();
                let old_lat = store.latitude.unwrap_or(0.0);
                let old_lng = store.longitude.unwrap_or(0.0);
                let drifted = (old_lat - extracted.latitude).abs() > epsilon_deg
                    || (old_lng - extracted.longitude).abs() > epsilon_deg;

                if drifted {
                    store.set_coordinates(extracted);
                    report.changes.push(RepairChange {
                        id: store.id,
                        name: store.name.clone(),
                        old,
                        new: extracted,
                    });
                    if !bounds.contains(extracted.latitude, extracted.longitude) {
                        report.suspect.push(store.name.clone());
                    }
                }
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(id = store.id, url = %url, %error, "skipping unrepairable map link");
            }
        }

        // Pre-existing coordinates can be implausible too, repaired or not.
        if let Some(coords) = store.coordinates() {
            if !bounds.contains(coords.latitude, coords.longitude)
                && !report.suspect.contains(&store.name)
            {
                report.suspect.push(store.name.clone());
            }
        }
    }

    report
}
