//! Read-only catalogue queries
//!
//! Each command builds a fresh store from config, runs one service call and
//! prints either one line per restaurant or pretty JSON.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use catalogctl_core::{
    CatalogConfig, Restaurant, RestaurantRecord, RestaurantService, SearchFilter,
    DEFAULT_TOP_LIMIT,
};

use super::build_store;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output JSON instead of one line per restaurant
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct TopArgs {
    /// Number of restaurants to show
    #[arg(long, short = 'n', default_value_t = DEFAULT_TOP_LIMIT)]
    pub limit: usize,

    /// Output JSON instead of one line per restaurant
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Cuisine label to match (case-insensitive substring)
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Sector to match (case-insensitive substring)
    #[arg(long)]
    pub sector: Option<String>,

    /// Lowest average price, inclusive
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Highest average price, inclusive
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Output JSON instead of one line per restaurant
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Output JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

fn service(settings: &CatalogConfig) -> Result<RestaurantService> {
    let store = build_store(settings)?;
    Ok(RestaurantService::new(Arc::new(store)))
}

fn print_restaurants(restaurants: &[Restaurant], as_json: bool) -> Result<()> {
    if as_json {
        let records: Vec<RestaurantRecord> = restaurants.iter().map(Restaurant::to_record).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&records).context("Failed to serialize restaurants")?
        );
        return Ok(());
    }

    if restaurants.is_empty() {
        println!("No restaurants found");
    }
    for restaurant in restaurants {
        println!(
            "{}  {}  {}  {}",
            restaurant.id(),
            restaurant,
            restaurant.price().range(),
            restaurant.rating()
        );
    }
    Ok(())
}

pub async fn run_list(args: ListArgs, settings: &CatalogConfig) -> Result<()> {
    let restaurants = service(settings)?.get_all_restaurants().await?;
    print_restaurants(&restaurants, args.json)
}

pub async fn run_top(args: TopArgs, settings: &CatalogConfig) -> Result<()> {
    let restaurants = service(settings)?
        .get_top_rated_restaurants(args.limit)
        .await?;
    print_restaurants(&restaurants, args.json)
}

impl SearchArgs {
    fn filter(&self) -> SearchFilter {
        SearchFilter {
            cuisine: self.cuisine.clone(),
            sector: self.sector.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }
}

pub async fn run_search(args: SearchArgs, settings: &CatalogConfig) -> Result<()> {
    let hits = service(settings)?
        .search(&args.filter())
        .await
        .context("Search failed")?;
    print_restaurants(&hits, args.json)
}

pub async fn run_stats(args: StatsArgs, settings: &CatalogConfig) -> Result<()> {
    let stats = service(settings)?.get_statistics().await?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")?
        );
        return Ok(());
    }

    println!("Restaurants:    {}", stats.total);
    println!("Average rating: {:.2}", stats.average_rating);
    println!("\nBy cuisine:");
    for (cuisine, count) in &stats.by_cuisine {
        println!("  {:<20} {}", cuisine, count);
    }
    println!("\nBy sector:");
    for (sector, count) in &stats.by_sector {
        println!("  {:<20} {}", sector, count);
    }
    Ok(())
}
