//! catalogctl CLI - restaurant catalogue service and queries
//!
//! Entry point for the `catalogctl` binary:
//! - `serve` runs the REST API over an in-memory catalogue
//! - `list`, `top`, `search` and `stats` query the sample catalogue directly
//! - `config` shows where configuration is read from and what it resolves to

use anyhow::Result;
use clap::{Parser, Subcommand};
use catalogctl_core::CatalogConfig;

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "catalogctl",
    author,
    version,
    about = "In-memory restaurant catalogue with a REST API",
    long_about = "Serve and query a catalogue of restaurants. Records are validated on \
                  every write and kept in memory for the life of the process."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// List every restaurant in the catalogue
    List(commands::query::ListArgs),
    /// Show the highest rated restaurants
    Top(commands::query::TopArgs),
    /// Find restaurants by cuisine, sector or price
    Search(commands::query::SearchArgs),
    /// Show catalogue statistics
    Stats(commands::query::StatsArgs),
    /// Inspect catalogctl configuration (path, show)
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env values never override variables that are already set
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let settings = CatalogConfig::load()?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args, &settings).await?,
        Commands::List(args) => commands::query::run_list(args, &settings).await?,
        Commands::Top(args) => commands::query::run_top(args, &settings).await?,
        Commands::Search(args) => commands::query::run_search(args, &settings).await?,
        Commands::Stats(args) => commands::query::run_stats(args, &settings).await?,
        Commands::Config(args) => config::run_config(args, &settings)?,
    }

    Ok(())
}
