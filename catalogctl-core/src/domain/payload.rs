//! Request payloads: full creation input and partial updates

use serde::{Deserialize, Serialize};

use super::{
    Location, LocationInput, Price, PriceInput, Rating, RatingInput, Restaurant, RestaurantDraft,
    RestaurantId,
};
use crate::validation::ValidationError;

/// Body of a create request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRestaurant {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub cuisine: Vec<String>,
    pub location: LocationInput,
    pub price: PriceInput,
    #[serde(default)]
    pub rating: Option<RatingInput>,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub opening_hours: String,
    pub capacity: u32,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl NewRestaurant {
    /// Validate and build the aggregate.
    ///
    /// Nested value objects are checked first, then the restaurant fields.
    pub fn into_restaurant(self) -> Result<Restaurant, ValidationError> {
        let location = Location::try_from(self.location)?;
        let price = Price::try_from(self.price)?;
        let rating = match self.rating {
            Some(input) => Rating::try_from(input)?,
            None => Rating::unrated(),
        };

        let draft = RestaurantDraft {
            name: self.name,
            description: self.description,
            cuisine: self.cuisine,
            location,
            price,
            rating,
            phone: self.phone,
            email: self.email,
            opening_hours: self.opening_hours,
            capacity: self.capacity,
        };

        let mut restaurant = match self.id {
            Some(id) => Restaurant::with_id(RestaurantId::parse(&id)?, draft)?,
            None => Restaurant::new(draft)?,
        };

        if self.is_active == Some(false) {
            restaurant.deactivate();
        }

        Ok(restaurant)
    }
}

/// Body of an update request. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl RestaurantPatch {
    /// Patch that only replaces the rating.
    pub fn rating(rating: Rating) -> Self {
        Self {
            rating: Some(rating.into()),
            ..Self::default()
        }
    }

    /// Patch that only renames.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.cuisine.is_none()
            && self.location.is_none()
            && self.price.is_none()
            && self.rating.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.opening_hours.is_none()
            && self.capacity.is_none()
            && self.is_active.is_none()
    }

    /// Apply every present field through the restaurant's own updaters.
    ///
    /// Stops at the first invalid field; callers that need all-or-nothing
    /// semantics apply the patch to a copy.
    pub fn apply_to(&self, restaurant: &mut Restaurant) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            restaurant.update_name(name)?;
        }
        if let Some(description) = &self.description {
            restaurant.update_description(description)?;
        }
        if let Some(cuisine) = &self.cuisine {
            restaurant.update_cuisine(cuisine.clone())?;
        }
        if let Some(location) = &self.location {
            restaurant.update_location(Location::try_from(location.clone())?);
        }
        if let Some(price) = &self.price {
            restaurant.update_price(Price::try_from(price.clone())?);
        }
        if let Some(rating) = self.rating {
            restaurant.update_rating(Rating::try_from(rating)?);
        }
        if let Some(phone) = &self.phone {
            restaurant.update_phone(phone)?;
        }
        if let Some(email) = &self.email {
            restaurant.update_email(email)?;
        }
        if let Some(hours) = &self.opening_hours {
            restaurant.update_opening_hours(hours);
        }
        if let Some(capacity) = self.capacity {
            restaurant.update_capacity(capacity)?;
        }
        match self.is_active {
            Some(true) => restaurant.activate(),
            Some(false) => restaurant.deactivate(),
            None => {}
        }
        Ok(())
    }
}
