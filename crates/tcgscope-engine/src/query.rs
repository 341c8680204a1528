//! The filter/rank pipeline.
//!
//! `query` is a pure function over its arguments: the same store collection
//! and criteria always produce the same ordered result, and the base
//! records are never mutated.

use std::cmp::Ordering;

use tcgscope_core::Store;
use tcgscope_geo::distance_km;

use crate::criteria::{QueryCriteria, StoreTypeFilter};

/// A store plus its per-query distance annotation.
///
/// `distance_km` is set only when the criteria carried a reference position
/// and the store has coordinates. Transient: computed per query, never
/// written back.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStore<'a> {
    pub store: &'a Store,
    pub distance_km: Option<f64>,
}

/// Run the full pipeline: distance annotation, filtering, then ordering.
///
/// Distances are attached before filtering so distance sorting always has
/// data regardless of which filters apply. Filters are AND-ed. With
/// `sort_by_distance` and a reference position set, the result is stably
/// sorted ascending by distance with coordinate-less stores after every
/// store that has one; otherwise input order is preserved exactly.
#[must_use]
pub fn query<'a>(stores: &'a [Store], criteria: &QueryCriteria) -> Vec<RankedStore<'a>> {
    let mut result: Vec<RankedStore<'a>> = stores
        .iter()
        .map(|store| RankedStore {
            store,
            distance_km: criteria.reference.and_then(|reference| {
                store.coordinates().map(|coords| distance_km(reference, coords))
            }),
        })
        .collect();

    result.retain(|ranked| matches(ranked.store, criteria));

    if criteria.sort_by_distance && criteria.reference.is_some() {
        // Vec::sort_by is stable: ties and the coordinate-less tail keep
        // their input order.
        result.sort_by(|a, b| match (a.distance_km, b.distance_km) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
    }

    tracing::debug!(
        matched = result.len(),
        total = stores.len(),
        "query pipeline complete"
    );
    result
}

fn matches(store: &Store, criteria: &QueryCriteria) -> bool {
    if let Some(city) = &criteria.city {
        if store.city.as_deref() != Some(city.as_str()) {
            return false;
        }
    }

    match criteria.store_type {
        StoreTypeFilter::All => {}
        StoreTypeFilter::PhysicalOnly => {
            if !store.has_physical_store {
                return false;
            }
        }
        StoreTypeFilter::OnlineOnly => {
            if store.has_physical_store {
                return false;
            }
        }
    }

    store.products.stocks_all(&criteria.products)
}

#[cfg(test)]
mod tests {
    use tcgscope_core::{Availability, ProductKey, ProductShelf};
    use tcgscope_geo::Coordinates;

    use super::*;

    const ISTANBUL: Coordinates = Coordinates {
        latitude: 41.0082,
        longitude: 28.9784,
    };

    struct StoreSpec {
        id: u32,
        city: Option<&'static str>,
        physical: bool,
        coords: Option<(f64, f64)>,
    }

    fn build(spec: &StoreSpec) -> Store {
        Store {
            id: spec.id,
            name: format!("store-{}", spec.id),
            products: ProductShelf::default(),
            website: None,
            location: None,
            city: spec.city.map(str::to_string),
            has_physical_store: spec.physical,
            note: None,
            latitude: spec.coords.map(|(lat, _)| lat),
            longitude: spec.coords.map(|(_, lng)| lng),
            maps_url: None,
        }
    }

    fn ids(results: &[RankedStore<'_>]) -> Vec<u32> {
        results.iter().map(|r| r.store.id).collect()
    }

    fn catalog() -> Vec<Store> {
        vec![
            build(&StoreSpec {
                id: 1,
                city: Some("İstanbul"),
                physical: true,
                coords: Some((40.99, 29.03)), // Kadıköy, ~10 km out
            }),
            build(&StoreSpec {
                id: 2,
                city: Some("Ankara"),
                physical: true,
                coords: Some((39.93, 32.86)), // ~350 km out
            }),
            build(&StoreSpec {
                id: 3,
                city: None,
                physical: false,
                coords: None, // online only, no coordinates
            }),
            build(&StoreSpec {
                id: 4,
                city: Some("İstanbul"),
                physical: true,
                coords: None, // physical but not yet geocoded
            }),
        ]
    }

    #[test]
    fn no_criteria_returns_everything_in_input_order() {
        let stores = catalog();
        let results = query(&stores, &QueryCriteria::default());
        assert_eq!(ids(&results), vec![1, 2, 3, 4]);
        assert!(results.iter().all(|r| r.distance_km.is_none()));
    }

    #[test]
    fn filtering_without_sort_preserves_input_order() {
        let stores = catalog();
        let criteria = QueryCriteria {
            store_type: StoreTypeFilter::PhysicalOnly,
            // Reference set but sorting off: annotation only.
            reference: Some(ISTANBUL),
            ..QueryCriteria::default()
        };
        let results = query(&stores, &criteria);
        assert_eq!(ids(&results), vec![1, 2, 4]);
    }

    #[test]
    fn city_filter_is_exact_match() {
        let stores = catalog();
        let criteria = QueryCriteria {
            city: Some("İstanbul".to_string()),
            ..QueryCriteria::default()
        };
        assert_eq!(ids(&query(&stores, &criteria)), vec![1, 4]);

        let criteria = QueryCriteria {
            city: Some("istanbul".to_string()),
            ..QueryCriteria::default()
        };
        assert!(query(&stores, &criteria).is_empty(), "case-sensitive");
    }

    #[test]
    fn online_only_excludes_physical_stores() {
        let stores = catalog();
        let criteria = QueryCriteria {
            store_type: StoreTypeFilter::OnlineOnly,
            ..QueryCriteria::default()
        };
        assert_eq!(ids(&query(&stores, &criteria)), vec![3]);
    }

    #[test]
    fn product_filter_requires_every_selected_key_present() {
        let mut stores = catalog();
        stores[0].products.pokemon_en = Availability::Present;
        stores[0].products.mtg = Availability::Present;
        stores[1].products.pokemon_en = Availability::Present;
        stores[1].products.mtg = Availability::Unknown; // not confirmed
        stores[2].products.pokemon_en = Availability::Present;
        stores[2].products.mtg = Availability::Absent;

        let criteria = QueryCriteria {
            products: vec![ProductKey::PokemonEn, ProductKey::Mtg],
            ..QueryCriteria::default()
        };
        assert_eq!(ids(&query(&stores, &criteria)), vec![1]);
    }

    #[test]
    fn distance_annotation_needs_reference_and_store_coordinates() {
        let stores = catalog();
        let criteria = QueryCriteria {
            reference: Some(ISTANBUL),
            ..QueryCriteria::default()
        };
        let results = query(&stores, &criteria);
        assert!(results[0].distance_km.is_some());
        assert!(results[2].distance_km.is_none(), "no coordinates, no distance");
    }

    #[test]
    fn distance_sort_puts_coordinate_less_stores_last() {
        let stores = catalog();
        let criteria = QueryCriteria {
            reference: Some(ISTANBUL),
            sort_by_distance: true,
            ..QueryCriteria::default()
        };
        // Kadıköy first, Ankara second, then the two coordinate-less
        // stores in their original relative order.
        assert_eq!(ids(&query(&stores, &criteria)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn sort_flag_without_reference_keeps_input_order() {
        let mut stores = catalog();
        stores.swap(0, 1); // Ankara now ahead of Kadıköy
        let criteria = QueryCriteria {
            sort_by_distance: true,
            ..QueryCriteria::default()
        };
        assert_eq!(ids(&query(&stores, &criteria)), vec![2, 1, 3, 4]);
    }

    #[test]
    fn filtered_out_stores_never_reappear_after_sorting() {
        let stores = catalog();
        let criteria = QueryCriteria {
            city: Some("Ankara".to_string()),
            reference: Some(ISTANBUL),
            sort_by_distance: true,
            ..QueryCriteria::default()
        };
        assert_eq!(ids(&query(&stores, &criteria)), vec![2]);
    }

    #[test]
    fn query_does_not_mutate_the_input_collection() {
        let stores = catalog();
        let before = stores.clone();
        let criteria = QueryCriteria {
            reference: Some(ISTANBUL),
            sort_by_distance: true,
            ..QueryCriteria::default()
        };
        let _ = query(&stores, &criteria);
        assert_eq!(stores, before);
    }
}
