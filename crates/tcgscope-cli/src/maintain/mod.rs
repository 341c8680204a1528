//! Interactive dataset maintenance: compound-location splits, coordinate
//! enrichment, and repair of drifted coordinates.
//!
//! Each pass plans its work up front, walks the pending records one at a
//! time, and persists atomically at the end, only when at least one
//! record actually changed.

mod enrich;
mod prompt;
mod repair;
mod split;

use tcgscope_core::AppConfig;

/// The `enrich` command: the interactive split pass followed by the
/// coordinate/map-link enrichment pass.
pub fn run_enrich(config: &AppConfig) -> anyhow::Result<()> {
    let mut stores = tcgscope_data::load_stores(&config.stores_path)?;

    let split_count = split::run_split_pass(&mut stores, &config.location_connective)?;
    if split_count > 0 {
        tcgscope_data::save_stores(&config.stores_path, &stores)?;
        println!("saved {split_count} split(s)");
    }

    let updated = enrich::run_enrich_pass(&mut stores, &config.region)?;
    if updated > 0 {
        tcgscope_data::save_stores(&config.stores_path, &stores)?;
        println!("updated and saved {updated} store(s)");
    } else {
        println!("no stores updated");
    }
    Ok(())
}

/// The `repair` command: re-extract every stored map link and overwrite
/// coordinates that drifted past the configured epsilon.
pub fn run_repair(config: &AppConfig) -> anyhow::Result<()> {
    let mut stores = tcgscope_data::load_stores(&config.stores_path)?;
    let report = repair::repair_coordinates(&mut stores, &config.region, config.repair_epsilon_deg);

    for change in &report.changes {
        match change.old {
            Some(old) => println!(
                "[{}] {}: ({}, {}) -> ({}, {})",
                change.id,
                change.name,
                old.latitude,
                old.longitude,
                change.new.latitude,
                change.new.longitude
            ),
            None => println!(
                "[{}] {}: none -> ({}, {})",
                change.id, change.name, change.new.latitude, change.new.longitude
            ),
        }
    }

    if report.changes.is_empty() {
        println!("no coordinates needed fixing");
    } else {
        tcgscope_data::save_stores(&config.stores_path, &stores)?;
        println!("fixed and saved {} store(s)", report.changes.len());
    }

    if !report.suspect.is_empty() {
        println!("{} store(s) have out-of-region coordinates:", report.suspect.len());
        for name in &report.suspect {
            println!("  - {name}");
        }
    }
    Ok(())
}
