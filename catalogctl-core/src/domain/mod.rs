//! Domain model with validation at construction
//!
//! All user input is validated when these types are built.
//! Invalid input returns `ValidationError`, never a panic.

pub mod location;
pub mod payload;
pub mod price;
pub mod rating;
pub mod restaurant;

pub use location::{Location, LocationInput, DEFAULT_CITY};
pub use payload::{NewRestaurant, RestaurantPatch};
pub use price::{Price, PriceInput, PriceRange, DEFAULT_CURRENCY};
pub use rating::{Rating, RatingInput, RatingRecord};
pub use restaurant::{Restaurant, RestaurantDraft, RestaurantId, RestaurantRecord};
