use clap::{Parser, Subcommand};

mod maintain;
mod query;

#[derive(Debug, Parser)]
#[command(name = "tcgscope")]
#[command(about = "Store catalog queries and coordinate maintenance")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Filter and rank the store catalog.
    Query(query::QueryArgs),
    /// List the cities in the catalog and the preset reference positions.
    Cities,
    /// Interactively split compound locations and fill in missing
    /// coordinates and map links.
    Enrich,
    /// Re-extract coordinates from stored map links and fix drifted values.
    Repair,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = tcgscope_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Query(args) => query::run(&config, &args),
        Commands::Cities => query::run_cities(&config),
        Commands::Enrich => maintain::run_enrich(&config),
        Commands::Repair => maintain::run_repair(&config),
    }
}
