//! The enrichment pass: physical stores with a location but no
//! coordinates or map link get a pasted map URL run through the extractor.

use tcgscope_core::Store;
use tcgscope_geo::{extract_coordinates, Coordinates, RegionBounds};

use super::prompt;

/// Indexes of physical stores with a location that still lack a
/// coordinate or a map link.
pub(super) fn pending_enrichment(stores: &[Store]) -> Vec<usize> {
    stores
        .iter()
        .enumerate()
        .filter(|(_, store)| {
            store.has_physical_store
                && store.location.is_some()
                && (store.coordinates().is_none() || store.maps_url.is_none())
        })
        .map(|(index, _)| index)
        .collect()
}

/// Record an extracted pair and the URL it came from.
pub(super) fn apply_enrichment(store: &mut Store, url: &str, coords: Coordinates) {
    store.set_coordinates(coords);
    store.maps_url = Some(url.trim().to_string());
}

/// Run the extractor, reporting failures as a no-match so the prompt loop
/// can offer a retry.
fn try_extract(url: &str) -> Option<Coordinates> {
    match extract_coordinates(url) {
        Ok(found) => found,
        Err(error) => {
            tracing::warn!(url, %error, "coordinate extraction failed");
            None
        }
    }
}

/// Interactive enrichment pass. Returns the number of records updated.
pub(super) fn run_enrich_pass(
    stores: &mut [Store],
    bounds: &RegionBounds,
) -> anyhow::Result<usize> {
    let pending = pending_enrichment(stores);
    if pending.is_empty() {
        println!("every physical store already has coordinates and a map link");
        return Ok(0);
    }

    println!("{} store(s) need coordinates or a map link.", pending.len());
    println!("Paste a map link for each; leave blank to skip.");

    let mut updated = 0;
    for index in pending {
        let store = &stores[index];
        println!("\n[{}] {}", store.id, store.name);
        if let Some(location) = &store.location {
            println!("    location: {location}");
        }
        if let Some(website) = &store.website {
            println!("    website: {website}");
        }

        let has_coords = store.coordinates().is_some();
        if let Some(coords) = store.coordinates() {
            println!("    coordinates: {}, {}", coords.latitude, coords.longitude);
            println!("    map link missing");
        } else {
            println!("    coordinates and map link missing");
        }

        let url = prompt::ask("\n    map link: ")?;
        if url.is_empty() {
            println!("    skipped");
            continue;
        }

        if has_coords {
            // Coordinates already known; only the provenance link is missing.
            stores[index].maps_url = Some(url);
            println!("    map link added");
            updated += 1;
            continue;
        }

        let coords = match try_extract(&url) {
            Some(coords) => Some((url, coords)),
            None => {
                println!("    no coordinates found in that link.");
                if prompt::confirm("    try another link?")? {
                    let retry_url = prompt::ask("    map link: ")?;
                    try_extract(&retry_url).map(|coords| (retry_url, coords))
                } else {
                    None
                }
            }
        };

        match coords {
            Some((url, coords)) => {
                if !bounds.contains(coords.latitude, coords.longitude) {
                    println!("    warning: coordinates are outside the configured region");
                }
                apply_enrichment(&mut stores[index], &url, coords);
                println!("    added: {}, {}", coords.latitude, coords.longitude);
                updated += 1;
            }
            None => println!("    still nothing, skipping"),
        }
    }

    Ok(updated)
}
