//! Preset reference positions for manual city selection.

use std::collections::BTreeSet;

use tcgscope_geo::Coordinates;

use crate::store::Store;

/// City centres offered as a manual substitute for a live position fix.
pub const CITY_PRESETS: &[(&str, Coordinates)] = &[
    (
        "İstanbul",
        Coordinates {
            latitude: 41.0082,
            longitude: 28.9784,
        },
    ),
    (
        "Ankara",
        Coordinates {
            latitude: 39.9334,
            longitude: 32.8597,
        },
    ),
    (
        "İzmir",
        Coordinates {
            latitude: 38.4237,
            longitude: 27.1428,
        },
    ),
    (
        "Antalya",
        Coordinates {
            latitude: 36.8969,
            longitude: 30.7133,
        },
    ),
];

/// Look up the preset centre for a city name.
#[must_use]
pub fn preset_coordinates(city: &str) -> Option<Coordinates> {
    CITY_PRESETS
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, coords)| *coords)
}

/// The sorted distinct city names present in a store collection.
#[must_use]
pub fn cities(stores: &[Store]) -> Vec<String> {
    let set: BTreeSet<&str> = stores.iter().filter_map(|s| s.city.as_deref()).collect();
    set.into_iter().map(str::to_string).collect()
}
