//! HTTP server command for the restaurant API
//!
//! Flags override the `[server]` and `[store]` sections of the config file.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;

use catalogctl_core::CatalogConfig;
use catalogctl_server::{run_server, AppState, ServerConfig};

use super::build_store;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default from config: 127.0.0.1:3030)
    #[arg(long, short = 'b', env = "CATALOGCTL_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Simulated latency per store operation, in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Start with an empty catalogue instead of the sample data
    #[arg(long)]
    pub no_seed: bool,
}

impl ServeArgs {
    /// Merge flags over the loaded config.
    fn apply(&self, settings: &CatalogConfig) -> CatalogConfig {
        let mut merged = settings.clone();
        if let Some(bind) = self.bind {
            merged.server.bind = bind;
        }
        if self.cors_permissive {
            merged.server.cors_permissive = true;
        }
        if let Some(latency_ms) = self.latency_ms {
            merged.store.latency_ms = latency_ms;
        }
        if self.no_seed {
            merged.store.seed = false;
        }
        merged
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, settings: &CatalogConfig) -> Result<()> {
    let settings = args.apply(settings);

    let store = build_store(&settings)?;
    tracing::info!(
        bind = %settings.server.bind,
        latency_ms = settings.store.latency_ms,
        seeded = settings.store.seed,
        "Starting catalogctl server"
    );

    let config = ServerConfig {
        bind_addr: settings.server.bind,
        cors_permissive: settings.server.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(AppState::new(Arc::new(store)), config)
        .await
        .context("Server error")?;

    Ok(())
}
