use anyhow::Result;
use clap::{Parser, Subcommand};
use catalogctl_core::CatalogConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
}

pub fn run_config(args: ConfigArgs, settings: &CatalogConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(settings),
    }
}

fn run_path() -> Result<()> {
    println!("{}", CatalogConfig::config_path().display());
    Ok(())
}

fn run_show(settings: &CatalogConfig) -> Result<()> {
    println!("{}", settings.to_toml()?);
    Ok(())
}
