//! In-memory restaurant store
//!
//! Records live in a map guarded by a single `RwLock`. Each operation first
//! waits out the configured latency (standing in for network I/O), then
//! runs its body inside one lock acquisition without suspending again.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{sample_restaurants, RestaurantStore};
use crate::domain::{Restaurant, RestaurantId, RestaurantPatch};
use crate::error::{CatalogError, Result};

/// Map plus insertion order, so listings are stable.
#[derive(Default)]
struct Slots {
    by_id: HashMap<RestaurantId, Restaurant>,
    order: Vec<RestaurantId>,
}

impl Slots {
    fn ordered(&self) -> impl Iterator<Item = &Restaurant> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    fn name_taken(&self, name: &str, except: Option<&RestaurantId>) -> bool {
        let wanted = name.to_lowercase();
        self.by_id
            .values()
            .filter(|r| Some(r.id()) != except)
            .any(|r| r.name().to_lowercase() == wanted)
    }

    fn insert(&mut self, restaurant: Restaurant) -> Result<()> {
        if self.by_id.contains_key(restaurant.id()) {
            return Err(CatalogError::conflict(format!(
                "a restaurant with id '{}' already exists",
                restaurant.id()
            )));
        }
        if self.name_taken(restaurant.name(), None) {
            return Err(CatalogError::conflict(format!(
                "a restaurant named '{}' already exists",
                restaurant.name()
            )));
        }

        self.order.push(restaurant.id().clone());
        self.by_id.insert(restaurant.id().clone(), restaurant);
        Ok(())
    }
}

/// Process-lifetime store backed by a `HashMap`
pub struct InMemoryStore {
    slots: RwLock<Slots>,
    latency: Duration,
}

impl InMemoryStore {
    /// Empty store with no simulated latency.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(Slots::default()),
            latency: Duration::ZERO,
        }
    }

    /// Store preloaded with the sample Manta catalogue.
    pub fn seeded() -> Result<Self> {
        Self::from_restaurants(sample_restaurants()?)
    }

    /// Store preloaded with `restaurants`, applying the same duplicate
    /// checks as `create`.
    pub fn from_restaurants(restaurants: impl IntoIterator<Item = Restaurant>) -> Result<Self> {
        let mut slots = Slots::default();
        for restaurant in restaurants {
            slots.insert(restaurant)?;
        }
        Ok(Self {
            slots: RwLock::new(slots),
            latency: Duration::ZERO,
        })
    }

    /// Delay every operation by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    async fn filter<F>(&self, keep: F) -> Vec<Restaurant>
    where
        F: Fn(&Restaurant) -> bool + Send,
    {
        self.simulate_latency().await;
        let slots = self.slots.read().await;
        slots.ordered().filter(|r| keep(r)).cloned().collect::<Vec<_>>()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RestaurantStore for InMemoryStore {
    async fn create(&self, restaurant: Restaurant) -> Result<Restaurant> {
        self.simulate_latency().await;

        let mut slots = self.slots.write().await;
        slots.insert(restaurant.clone())?;
        debug!(id = %restaurant.id(), name = restaurant.name(), "restaurant stored");
        Ok(restaurant)
    }

    async fn find_all(&self) -> Result<Vec<Restaurant>> {
        Ok(self.filter(|_| true).await)
    }

    async fn find_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>> {
        self.simulate_latency().await;
        let slots = self.slots.read().await;
        Ok(slots.by_id.get(id).cloned())
    }

    async fn find_by_cuisine(&self, cuisine: &str) -> Result<Vec<Restaurant>> {
        let needle = cuisine.to_lowercase();
        Ok(self
            .filter(|r| r.cuisine_labels().any(|c| c.to_lowercase().contains(&needle)))
            .await)
    }

    async fn find_by_sector(&self, sector: &str) -> Result<Vec<Restaurant>> {
        let needle = sector.to_lowercase();
        Ok(self
            .filter(|r| r.location().sector().to_lowercase().contains(&needle))
            .await)
    }

    async fn update(&self, id: &RestaurantId, patch: &RestaurantPatch) -> Result<Restaurant> {
        self.simulate_latency().await;

        let mut slots = self.slots.write().await;
        let mut working = slots
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(id))?;

        patch.apply_to(&mut working)?;

        if patch.name.is_some() && slots.name_taken(working.name(), Some(id)) {
            return Err(CatalogError::conflict(format!(
                "a restaurant named '{}' already exists",
                working.name()
            )));
        }

        slots.by_id.insert(id.clone(), working.clone());
        debug!(%id, "restaurant updated");
        Ok(working)
    }

    async fn add_review(&self, id: &RestaurantId, score: f64) -> Result<Option<Restaurant>> {
        self.simulate_latency().await;

        let mut slots = self.slots.write().await;
        let Some(stored) = slots.by_id.get_mut(id) else {
            return Ok(None);
        };
        stored.add_review(score)?;
        debug!(%id, score, reviews = stored.rating().total_reviews(), "review added");
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: &RestaurantId) -> Result<bool> {
        self.simulate_latency().await;

        let mut slots = self.slots.write().await;
        if slots.by_id.remove(id).is_none() {
            return Ok(false);
        }
        slots.order.retain(|stored| stored != id);
        debug!(%id, "restaurant deleted");
        Ok(true)
    }

    async fn count(&self) -> Result<usize> {
        self.simulate_latency().await;
        Ok(self.slots.read().await.by_id.len())
    }

    async fn exists(&self, id: &RestaurantId) -> Result<bool> {
        self.simulate_latency().await;
        Ok(self.slots.read().await.by_id.contains_key(id))
    }
}
