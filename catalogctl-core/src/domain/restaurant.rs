//! Restaurant aggregate root
//!
//! Every field is validated on construction and again by the updater that
//! changes it, so a `Restaurant` value is always internally consistent.

use std::fmt;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Location, Price, Rating, RatingRecord};
use crate::validation::{require_min_len, require_text, ValidationError};

const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 100;
const MIN_DESCRIPTION_LEN: usize = 20;
const MAX_CUISINES: usize = 5;
const MIN_CAPACITY: u32 = 10;
const MAX_CAPACITY: u32 = 500;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{9,10}$").expect("invalid phone regex"));

static PHONE_SEPARATORS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s-]").expect("invalid separator regex"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

/// Opaque restaurant identifier.
///
/// Generated ids are UUID v4 strings, but any non-blank string is accepted
/// so records can be rebuilt from storage with their original keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(String);

impl RestaurantId {
    /// Fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RestaurantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Everything needed to build a restaurant, before validation.
#[derive(Debug, Clone)]
pub struct RestaurantDraft {
    pub name: String,
    pub description: String,
    pub cuisine: Vec<String>,
    pub location: Location,
    pub price: Price,
    pub rating: Rating,
    pub phone: String,
    pub email: String,
    pub opening_hours: String,
    pub capacity: u32,
}

#[derive(Debug, Clone)]
pub struct Restaurant {
    id: RestaurantId,
    name: String,
    description: String,
    cuisine: Vec<String>,
    location: Location,
    price: Price,
    rating: Rating,
    phone: String,
    email: String,
    opening_hours: String,
    capacity: u32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Restaurant {
    /// Build a new, active restaurant with a generated id.
    pub fn new(draft: RestaurantDraft) -> Result<Self, ValidationError> {
        Self::with_id(RestaurantId::generate(), draft)
    }

    /// Build a fresh restaurant under a caller-chosen id.
    ///
    /// The restaurant starts active and both timestamps are set to now; see
    /// `restore` for records that already carry that state. Fields are checked in order (name, description, cuisine, phone,
    /// email, capacity) and the first violation is returned.
    pub fn with_id(id: RestaurantId, draft: RestaurantDraft) -> Result<Self, ValidationError> {
        validate_name(&draft.name)?;
        validate_description(&draft.description)?;
        validate_cuisine(&draft.cuisine)?;
        validate_phone(&draft.phone)?;
        validate_email(&draft.email)?;
        validate_capacity(draft.capacity)?;

        let now = Utc::now();
        Ok(Self {
            id,
            name: draft.name,
            description: draft.description,
            cuisine: draft.cuisine,
            location: draft.location,
            price: draft.price,
            rating: draft.rating,
            phone: draft.phone,
            email: draft.email,
            opening_hours: draft.opening_hours,
            capacity: draft.capacity,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a stored restaurant with its persisted state.
    ///
    /// Runs the same field checks as `with_id`, but keeps the activation
    /// flag and both timestamps instead of resetting them.
    pub fn restore(
        id: RestaurantId,
        draft: RestaurantDraft,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if updated_at < created_at {
            return Err(ValidationError::InvalidFormat {
                field: "updatedAt",
                reason: "must not precede createdAt",
            });
        }

        let mut restaurant = Self::with_id(id, draft)?;
        restaurant.is_active = is_active;
        restaurant.created_at = created_at;
        restaurant.updated_at = updated_at;
        Ok(restaurant)
    }

    pub fn id(&self) -> &RestaurantId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Cuisine labels, returned as an owned copy.
    pub fn cuisine(&self) -> Vec<String> {
        self.cuisine.clone()
    }

    /// Borrowing view of the cuisine labels for read-only scans.
    pub fn cuisine_labels(&self) -> impl Iterator<Item = &str> {
        self.cuisine.iter().map(String::as_str)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn rating(&self) -> &Rating {
        &self.rating
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn opening_hours(&self) -> &str {
        &self.opening_hours
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_name(&mut self, name: &str) -> Result<(), ValidationError> {
        validate_name(name)?;
        self.name = name.to_owned();
        self.touch();
        Ok(())
    }

    pub fn update_description(&mut self, description: &str) -> Result<(), ValidationError> {
        validate_description(description)?;
        self.description = description.to_owned();
        self.touch();
        Ok(())
    }

    pub fn update_cuisine(&mut self, cuisine: Vec<String>) -> Result<(), ValidationError> {
        validate_cuisine(&cuisine)?;
        self.cuisine = cuisine;
        self.touch();
        Ok(())
    }

    /// Value objects are already valid, so these cannot fail.
    pub fn update_location(&mut self, location: Location) {
        self.location = location;
        self.touch();
    }

    pub fn update_price(&mut self, price: Price) {
        self.price = price;
        self.touch();
    }

    pub fn update_rating(&mut self, rating: Rating) {
        self.rating = rating;
        self.touch();
    }

    pub fn update_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        validate_phone(phone)?;
        self.phone = phone.to_owned();
        self.touch();
        Ok(())
    }

    pub fn update_email(&mut self, email: &str) -> Result<(), ValidationError> {
        validate_email(email)?;
        self.email = email.to_owned();
        self.touch();
        Ok(())
    }

    pub fn update_opening_hours(&mut self, hours: &str) {
        self.opening_hours = hours.to_owned();
        self.touch();
    }

    pub fn update_capacity(&mut self, capacity: u32) -> Result<(), ValidationError> {
        validate_capacity(capacity)?;
        self.capacity = capacity;
        self.touch();
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.touch();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    /// Fold a new review score into the rating.
    pub fn add_review(&mut self, score: f64) -> Result<(), ValidationError> {
        self.rating = self.rating.add_review(score)?;
        self.touch();
        Ok(())
    }

    /// Plain structured view of every field.
    pub fn to_record(&self) -> RestaurantRecord {
        RestaurantRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            cuisine: self.cuisine.clone(),
            location: self.location.clone(),
            price: self.price.clone(),
            rating: self.rating.to_record(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            is_active: self.is_active,
            opening_hours: self.opening_hours.clone(),
            capacity: self.capacity,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.name,
            self.cuisine.join(", "),
            self.location.sector()
        )
    }
}

/// Serialized restaurant
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    pub id: RestaurantId,
    pub name: String,
    pub description: String,
    pub cuisine: Vec<String>,
    pub location: Location,
    pub price: Price,
    pub rating: RatingRecord,
    pub phone: String,
    pub email: String,
    pub is_active: bool,
    pub opening_hours: String,
    pub capacity: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Restaurant> for RestaurantRecord {
    fn from(restaurant: &Restaurant) -> Self {
        restaurant.to_record()
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    require_text("name", name)?;
    require_min_len("name", name, MIN_NAME_LEN)?;
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    require_text("description", description)?;
    require_min_len("description", description, MIN_DESCRIPTION_LEN)
}

fn validate_cuisine(cuisine: &[String]) -> Result<(), ValidationError> {
    if cuisine.is_empty() {
        return Err(ValidationError::Empty { field: "cuisine" });
    }
    if cuisine.len() > MAX_CUISINES {
        return Err(ValidationError::TooMany {
            field: "cuisine",
            max: MAX_CUISINES,
        });
    }
    cuisine
        .iter()
        .try_for_each(|label| require_text("cuisine", label))
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = PHONE_SEPARATORS_RE.replace_all(phone, "");
    if !PHONE_RE.is_match(&digits) {
        return Err(ValidationError::InvalidFormat {
            field: "phone",
            reason: "must contain 9-10 digits",
        });
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidFormat {
            field: "email",
            reason: "not a valid email address",
        });
    }
    Ok(())
}

fn validate_capacity(capacity: u32) -> Result<(), ValidationError> {
    if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
        return Err(ValidationError::OutOfRange {
            field: "capacity",
            min: f64::from(MIN_CAPACITY),
            max: f64::from(MAX_CAPACITY),
            value: f64::from(capacity),
        });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::PriceRange;

    pub(crate) fn draft(name: &str) -> RestaurantDraft {
        RestaurantDraft {
            name: name.to_owned(),
            description: "Mariscos frescos y comida típica manabita frente al mar".to_owned(),
            cuisine: vec!["Mariscos".to_owned(), "Ecuatoriana".to_owned()],
            location: Location::new("Av. Malecón Escénico", "Tarqui").unwrap(),
            price: Price::new(PriceRange::Moderate, 15.0).unwrap(),
            rating: Rating::new(4.7, 326).unwrap(),
            phone: "0995431287".to_owned(),
            email: "elpescador@gmail.com".to_owned(),
            opening_hours: "Lunes a Domingo: 11:00 - 22:00".to_owned(),
            capacity: 80,
        }
    }

    #[test]
    fn valid_draft_round_trips_through_getters() {
        let r = Restaurant::new(draft("El Pescador")).unwrap();
        assert_eq!(r.name(), "El Pescador");
        assert_eq!(r.cuisine(), vec!["Mariscos", "Ecuatoriana"]);
        assert_eq!(r.location().sector(), "Tarqui");
        assert_eq!(r.price().average_price(), 15.0);
        assert_eq!(r.rating().score(), 4.7);
        assert_eq!(r.phone(), "0995431287");
        assert_eq!(r.capacity(), 80);
        assert!(r.is_active());
        assert_eq!(r.created_at(), r.updated_at());
        assert!(Uuid::parse_str(r.id().as_str()).is_ok());
    }

    #[test]
    fn keeps_supplied_id() {
        let id = RestaurantId::parse("a1b2c3d4-e5f6-4a5b-8c9d-0e1f2a3b4c5d").unwrap();
        let r = Restaurant::with_id(id.clone(), draft("El Pescador")).unwrap();
        assert_eq!(r.id(), &id);
    }

    #[test]
    fn each_invalid_field_fails_construction() {
        let cases: Vec<(&str, fn(&mut RestaurantDraft))> = vec![
            ("name", |d: &mut RestaurantDraft| d.name = "ab".into()),
            ("name", |d: &mut RestaurantDraft| d.name = "x".repeat(101)),
            ("description", |d: &mut RestaurantDraft| d.description = "too short".into()),
            ("cuisine", |d: &mut RestaurantDraft| d.cuisine.clear()),
            ("cuisine", |d: &mut RestaurantDraft| d.cuisine = vec!["a".to_owned(); 6]),
            ("cuisine", |d: &mut RestaurantDraft| d.cuisine.push("  ".into())),
            ("phone", |d: &mut RestaurantDraft| d.phone = "12345".into()),
            ("email", |d: &mut RestaurantDraft| d.email = "not-an-email".into()),
            ("capacity", |d: &mut RestaurantDraft| d.capacity = 9),
            ("capacity", |d: &mut RestaurantDraft| d.capacity = 501),
        ];

        for (field, mutate) in cases {
            let mut d = draft("El Pescador");
            mutate(&mut d);
            let err = Restaurant::new(d).unwrap_err();
            assert_eq!(err.field(), field, "{err}");
        }
    }

    #[test]
    fn first_violation_wins() {
        let mut d = draft("ab");
        d.capacity = 1;
        let err = Restaurant::new(d).unwrap_err();
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn phone_separators_are_ignored() {
        let mut d = draft("El Pescador");
        d.phone = "099-543 1287".into();
        let r = Restaurant::new(d).unwrap();
        assert_eq!(r.phone(), "099-543 1287");
    }

    #[test]
    fn failed_update_leaves_field_unchanged() {
        let mut r = Restaurant::new(draft("El Pescador")).unwrap();
        let before = r.updated_at();
        assert!(r.update_name("no").is_err());
        assert_eq!(r.name(), "El Pescador");
        assert_eq!(r.updated_at(), before);
    }

    #[test]
    fn updates_touch_timestamp() {
        let mut r = Restaurant::new(draft("El Pescador")).unwrap();
        let created = r.created_at();
        r.update_capacity(120).unwrap();
        assert_eq!(r.capacity(), 120);
        assert!(r.updated_at() >= created);
        assert_eq!(r.created_at(), created);

        r.deactivate();
        assert!(!r.is_active());
        r.activate();
        assert!(r.is_active());
    }

    #[test]
    fn restore_keeps_persisted_state() {
        let created = "2024-03-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let updated = "2024-06-15T08:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let id = RestaurantId::parse("stored-1").unwrap();

        let r = Restaurant::restore(id.clone(), draft("El Pescador"), false, created, updated)
            .unwrap();
        assert_eq!(r.id(), &id);
        assert!(!r.is_active());
        assert_eq!(r.created_at(), created);
        assert_eq!(r.updated_at(), updated);

        let err = Restaurant::restore(id, draft("El Pescador"), true, updated, created)
            .unwrap_err();
        assert_eq!(err.field(), "updatedAt");
    }

    #[test]
    fn cuisine_getter_is_a_copy() {
        let r = Restaurant::new(draft("El Pescador")).unwrap();
        let mut labels = r.cuisine();
        labels.push("Sushi".into());
        assert_eq!(r.cuisine().len(), 2);
    }

    #[test]
    fn add_review_replaces_rating() {
        let mut r = Restaurant::new(draft("El Pescador")).unwrap();
        r.update_rating(Rating::new(4.0, 3).unwrap());
        r.add_review(5.0).unwrap();
        assert_eq!(r.rating().score(), 4.3);
        assert_eq!(r.rating().total_reviews(), 4);
        assert!(r.add_review(7.0).is_err());
        assert_eq!(r.rating().total_reviews(), 4);
    }

    #[test]
    fn record_uses_camel_case() {
        let r = Restaurant::new(draft("El Pescador")).unwrap();
        let json = serde_json::to_value(r.to_record()).unwrap();
        assert_eq!(json["name"], "El Pescador");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["openingHours"], "Lunes a Domingo: 11:00 - 22:00");
        assert_eq!(json["location"]["sector"], "Tarqui");
        assert_eq!(json["price"]["range"], "$$");
        assert_eq!(json["rating"]["quality"], "Excellent");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn display_summary() {
        let r = Restaurant::new(draft("El Pescador")).unwrap();
        assert_eq!(r.to_string(), "El Pescador - Mariscos, Ecuatoriana - Tarqui");
    }
}
