//! The one-shot `query` and `cities` commands.

use anyhow::Context;
use tcgscope_core::{AppConfig, ProductKey};
use tcgscope_engine::{query, QueryCriteria, StoreTypeFilter};
use tcgscope_geo::{format_distance, Coordinates};

#[derive(Debug, clap::Args)]
pub struct QueryArgs {
    /// Only stores in this city (exact match).
    #[arg(long)]
    city: Option<String>,

    /// Only stores with a physical presence.
    #[arg(long, conflicts_with = "online")]
    physical: bool,

    /// Only online-only stores.
    #[arg(long)]
    online: bool,

    /// Product keys that must all be stocked, comma separated
    /// (e.g. `pokemonEn,mtg`).
    #[arg(long, value_delimiter = ',')]
    products: Vec<String>,

    /// Sort by distance from this position, given as `lat,lng`.
    #[arg(long, conflicts_with = "near")]
    from: Option<String>,

    /// Sort by distance from a preset city centre.
    #[arg(long)]
    near: Option<String>,
}

pub fn run(config: &AppConfig, args: &QueryArgs) -> anyhow::Result<()> {
    let stores = tcgscope_data::load_stores(&config.stores_path)?;
    let criteria = build_criteria(args)?;
    let results = query(&stores, &criteria);

    for ranked in &results {
        let store = ranked.store;
        let city = store.city.as_deref().unwrap_or("-");
        let kind = if store.has_physical_store {
            "physical"
        } else {
            "online"
        };
        let distance = ranked
            .distance_km
            .map_or_else(String::new, format_distance);
        println!(
            "{:>4}  {:<40}  {:<12}  {:<8}  {}",
            store.id, store.name, city, kind, distance
        );
    }
    println!("{} of {} stores matched", results.len(), stores.len());
    Ok(())
}

pub fn run_cities(config: &AppConfig) -> anyhow::Result<()> {
    let stores = tcgscope_data::load_stores(&config.stores_path)?;
    for city in tcgscope_core::cities(&stores) {
        match tcgscope_core::preset_coordinates(&city) {
            Some(coords) => {
                println!("{city}  ({}, {})", coords.latitude, coords.longitude);
            }
            None => println!("{city}"),
        }
    }
    Ok(())
}

fn build_criteria(args: &QueryArgs) -> anyhow::Result<QueryCriteria> {
    let store_type = if args.physical {
        StoreTypeFilter::PhysicalOnly
    } else if args.online {
        StoreTypeFilter::OnlineOnly
    } else {
        StoreTypeFilter::All
    };

    let products = args
        .products
        .iter()
        .map(|name| {
            ProductKey::parse(name).ok_or_else(|| {
                let known: Vec<&str> = ProductKey::ALL.iter().map(|k| k.as_str()).collect();
                anyhow::anyhow!(
                    "unknown product key '{name}' (expected one of: {})",
                    known.join(", ")
                )
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let reference = match (&args.from, &args.near) {
        (Some(raw), _) => Some(parse_reference(raw)?),
        (None, Some(city)) => Some(tcgscope_core::preset_coordinates(city).ok_or_else(|| {
            let known: Vec<&str> = tcgscope_core::CITY_PRESETS
                .iter()
                .map(|(name, _)| *name)
                .collect();
            anyhow::anyhow!("no preset for city '{city}' (known: {})", known.join(", "))
        })?),
        (None, None) => None,
    };

    Ok(QueryCriteria {
        city: args.city.clone(),
        store_type,
        products,
        reference,
        sort_by_distance: reference.is_some(),
    })
}

fn parse_reference(raw: &str) -> anyhow::Result<Coordinates> {
    let (lat, lng) = raw
        .split_once(',')
        .with_context(|| format!("expected 'lat,lng', got '{raw}'"))?;
    Ok(Coordinates {
        latitude: lat
            .trim()
            .parse()
            .with_context(|| format!("invalid latitude '{}'", lat.trim()))?,
        longitude: lng
            .trim()
            .parse()
            .with_context(|| format!("invalid longitude '{}'", lng.trim()))?,
    })
}
