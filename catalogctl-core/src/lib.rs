pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod store;
pub mod use_cases;
pub mod validation;

pub use config::CatalogConfig;
pub use domain::{
    Location, LocationInput, NewRestaurant, Price, PriceInput, PriceRange, Rating, RatingInput,
    RatingRecord, Restaurant, RestaurantDraft, RestaurantId, RestaurantPatch, RestaurantRecord,
};
pub use error::{CatalogError, Result};
pub use service::{RestaurantService, SearchFilter, Statistics, DEFAULT_TOP_LIMIT};
pub use store::{InMemoryStore, RestaurantStore};
pub use use_cases::{
    BatchDeleteReport, CreateRestaurant, DeleteOutcome, DeleteRestaurant, GetAllRestaurants,
    GetRestaurantById, UpdateReport, UpdateRestaurant,
};
pub use validation::ValidationError;
