//! Storage port for restaurant aggregates
//!
//! The service and use-case layers only see `RestaurantStore`, so the
//! in-memory implementation can be swapped for a durable backend.
//!
//! Conventions every implementation follows:
//! - absence on reads and deletes is `None`/`false`, never an error
//! - `update` on a missing id is `CatalogError::NotFound`
//! - read-modify-write operations (`update`, `add_review`) run under one
//!   exclusive section
//! - `create` rejects duplicate ids and case-insensitive duplicate names
//!   atomically (no separate check-then-insert window)

pub mod memory;
pub mod seed;

use async_trait::async_trait;

use crate::domain::{Restaurant, RestaurantId, RestaurantPatch};
use crate::error::Result;

pub use memory::InMemoryStore;
pub use seed::sample_restaurants;

#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// Insert a new restaurant, returning the stored value.
    async fn create(&self, restaurant: Restaurant) -> Result<Restaurant>;

    /// All restaurants in insertion order.
    async fn find_all(&self) -> Result<Vec<Restaurant>>;

    async fn find_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>>;

    /// Restaurants with any cuisine label containing `cuisine`, ignoring case.
    async fn find_by_cuisine(&self, cuisine: &str) -> Result<Vec<Restaurant>>;

    /// Restaurants whose sector contains `sector`, ignoring case.
    async fn find_by_sector(&self, sector: &str) -> Result<Vec<Restaurant>>;

    /// Apply a partial update; all-or-nothing.
    async fn update(&self, id: &RestaurantId, patch: &RestaurantPatch) -> Result<Restaurant>;

    /// Fold one review score into the stored rating in a single step.
    ///
    /// `None` when nothing is stored under `id`. Concurrent reviews of the
    /// same restaurant must all be counted.
    async fn add_review(&self, id: &RestaurantId, score: f64) -> Result<Option<Restaurant>>;

    /// Remove a restaurant. `false` when nothing was stored under `id`.
    async fn delete(&self, id: &RestaurantId) -> Result<bool>;

    async fn count(&self) -> Result<usize>;

    async fn exists(&self, id: &RestaurantId) -> Result<bool>;
}
