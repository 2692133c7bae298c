pub mod query;
pub mod serve;

use anyhow::{Context, Result};
use catalogctl_core::{CatalogConfig, InMemoryStore};

/// Build the store described by the `[store]` config section.
pub(crate) fn build_store(settings: &CatalogConfig) -> Result<InMemoryStore> {
    let store = if settings.store.seed {
        InMemoryStore::seeded().context("Failed to load sample catalogue")?
    } else {
        InMemoryStore::new()
    };
    Ok(store.with_latency(settings.store.latency()))
}
