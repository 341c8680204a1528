//! The split pass: records whose free-text location holds two place names
//! joined by the configured connective are split, on confirmation, into
//! two records.

use tcgscope_core::Store;

use super::prompt;

/// A confirmed decision to split one compound-location record in two.
#[derive(Debug, Clone)]
pub(super) struct SplitDecision {
    pub first_location: String,
    pub second_location: String,
    /// City for the new record; `None` keeps the original's city.
    pub second_city: Option<String>,
    /// Name for the new record; `None` uses [`derived_name`].
    pub second_name: Option<String>,
}

/// Indexes of records whose location contains the connective.
pub(super) fn pending_splits(stores: &[Store], connective: &str) -> Vec<usize> {
    stores
        .iter()
        .enumerate()
        .filter(|(_, store)| {
            store
                .location
                .as_deref()
                .is_some_and(|loc| loc.contains(connective))
        })
        .map(|(index, _)| index)
        .collect()
}

/// Split a location on the first occurrence of the connective, trimming
/// both halves.
pub(super) fn split_location(location: &str, connective: &str) -> Option<(String, String)> {
    let (first, second) = location.split_once(connective)?;
    Some((first.trim().to_string(), second.trim().to_string()))
}

/// Default name for the second record: the base name plus the last word of
/// the second location in parentheses.
pub(super) fn derived_name(name: &str, second_location: &str) -> String {
    let last_word = second_location
        .split_whitespace()
        .last()
        .unwrap_or(second_location);
    format!("{name} ({last_word})")
}

/// Apply a split: the record at `index` keeps the first location, a new
/// record with a freshly minted id takes the second. Coordinates and map
/// links are cleared on both, since the old pair no longer describes
/// either narrowed location.
pub(super) fn apply_split(stores: &mut Vec<Store>, index: usize, decision: &SplitDecision) {
    let mut second = stores[index].clone();

    let original = &mut stores[index];
    original.location = Some(decision.first_location.clone());
    original.clear_coordinates();

    second.id = tcgscope_data::next_id(stores);
    second.name = decision
        .second_name
        .clone()
        .unwrap_or_else(|| derived_name(&stores[index].name, &decision.second_location));
    second.location = Some(decision.second_location.clone());
    if let Some(city) = &decision.second_city {
        second.city = Some(city.clone());
    }
    second.clear_coordinates();

    stores.push(second);
}

/// Interactive split pass. Returns the number of records split; declining
/// leaves a record untouched.
pub(super) fn run_split_pass(stores: &mut Vec<Store>, connective: &str) -> anyhow::Result<usize> {
    let pending = pending_splits(stores, connective);
    if pending.is_empty() {
        return Ok(0);
    }

    println!("{} store(s) have a compound location:", pending.len());
    let mut split_count = 0;

    for index in pending {
        let store = &stores[index];
        let location = store.location.clone().unwrap_or_default();
        println!("\n[{}] {}", store.id, store.name);
        println!("    location: {location}");

        let Some((first_default, second_default)) = split_location(&location, connective) else {
            continue;
        };
        println!("    1. {first_default}");
        println!("    2. {second_default}");

        if !prompt::confirm("    split this store?")? {
            println!("    skipped");
            continue;
        }

        let first_location = prompt::ask_with_default("    first location", &first_default)?;
        let second_location = prompt::ask_with_default("    second location", &second_default)?;
        let city_default = stores[index].city.clone().unwrap_or_default();
        let second_city = prompt::ask_with_default("    second location's city", &city_default)?;
        let name_default = derived_name(&stores[index].name, &second_location);
        let second_name = prompt::ask_with_default("    second store's name", &name_default)?;

        apply_split(
            stores,
            index,
            &SplitDecision {
                first_location,
                second_location,
                second_city: (!second_city.is_empty()).then_some(second_city),
                second_name: Some(second_name),
            },
        );
        split_count += 1;

        let new = stores.last().expect("split just pushed a record");
        println!("    split into \"{}\" and \"{}\"", stores[index].name, new.name);
    }

    Ok(split_count)
}
