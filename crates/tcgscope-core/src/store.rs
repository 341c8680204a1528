use serde::{Deserialize, Serialize};
use tcgscope_geo::Coordinates;

use crate::products::ProductShelf;

/// One retailer entry in the catalog, physical and/or online.
///
/// The query engine treats these as immutable; only the maintenance
/// workflow writes the coordinate fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Stable unique identifier, never reused.
    pub id: u32,
    pub name: String,
    pub products: ProductShelf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Free-text sub-location. May still contain a compound location
    /// (two place names joined by a connective) pending a manual split.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// `false` means online-only.
    pub has_physical_store: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// The map link the coordinates were extracted from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps_url: Option<String>,
}

impl Store {
    /// The store's coordinate pair, present only when both axes are set.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates {
            latitude: self.latitude?,
            longitude: self.longitude?,
        })
    }

    pub fn set_coordinates(&mut self, coords: Coordinates) {
        self.latitude = Some(coords.latitude);
        self.longitude = Some(coords.longitude);
    }

    /// Drop the coordinates and the map link they came from. Used when a
    /// record's location changes and the old pair no longer applies.
    pub fn clear_coordinates(&mut self) {
        self.latitude = None;
        self.longitude = None;
        self.maps_url = None;
    }
}
