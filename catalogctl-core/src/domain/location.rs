//! Location value object - where a restaurant sits in the city

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::{require_min_len, require_text, ValidationError};

/// City assumed when none is given
pub const DEFAULT_CITY: &str = "Manta";

const MIN_ADDRESS_LEN: usize = 5;

/// Immutable street location.
///
/// Equality compares address, sector and city; coordinates are descriptive
/// only and do not take part in it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    address: String,
    sector: String,
    city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    longitude: Option<f64>,
}

impl Location {
    /// Create a location in the default city.
    pub fn new(address: &str, sector: &str) -> Result<Self, ValidationError> {
        Self::build(address, sector, DEFAULT_CITY, None, None)
    }

    /// Create a location with every field explicit.
    ///
    /// # Rules
    /// - address: not blank, at least 5 characters
    /// - sector: not blank
    pub fn build(
        address: &str,
        sector: &str,
        city: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self, ValidationError> {
        require_text("address", address)?;
        require_min_len("address", address, MIN_ADDRESS_LEN)?;
        require_text("sector", sector)?;

        Ok(Self {
            address: address.to_owned(),
            sector: sector.to_owned(),
            city: city.to_owned(),
            latitude,
            longitude,
        })
    }

    /// Return a copy carrying the given coordinates.
    pub fn with_coordinates(&self, latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..self.clone()
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    /// "address, sector, city"
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}", self.address, self.sector, self.city)
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address && self.sector == other.sector && self.city == other.city
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_address())
    }
}

/// Location as it arrives in request bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInput {
    pub address: String,
    pub sector: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl TryFrom<LocationInput> for Location {
    type Error = ValidationError;

    fn try_from(input: LocationInput) -> Result<Self, Self::Error> {
        Location::build(
            &input.address,
            &input.sector,
            input.city.as_deref().unwrap_or(DEFAULT_CITY),
            input.latitude,
            input.longitude,
        )
    }
}

impl From<&Location> for LocationInput {
    fn from(location: &Location) -> Self {
        Self {
            address: location.address.clone(),
            sector: location.sector.clone(),
            city: Some(location.city.clone()),
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_manta() {
        let loc = Location::new("Av. Malecón 123", "Tarqui").unwrap();
        assert_eq!(loc.city(), "Manta");
        assert_eq!(loc.full_address(), "Av. Malecón 123, Tarqui, Manta");
        assert_eq!(loc.to_string(), loc.full_address());
    }

    #[test]
    fn rejects_short_address() {
        let err = Location::new("Av 1", "Tarqui").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                field: "address",
                min: 5
            }
        );
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(matches!(
            Location::new("   ", "Tarqui").unwrap_err(),
            ValidationError::Empty { field: "address" }
        ));
        assert!(matches!(
            Location::new("Calle 13 y Av. 24", "").unwrap_err(),
            ValidationError::Empty { field: "sector" }
        ));
    }

    #[test]
    fn equality_ignores_coordinates() {
        let a = Location::new("Calle 13 y Av. 24", "Centro").unwrap();
        let b = a.with_coordinates(-0.95, -80.71);
        assert_eq!(a, b);
        assert_eq!(b.latitude(), Some(-0.95));
        assert_eq!(a.latitude(), None);

        let c = Location::build("Calle 13 y Av. 24", "Centro", "Portoviejo", None, None).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn input_without_city_uses_default() {
        let input: LocationInput =
            serde_json::from_str(r#"{"address": "Vía Puerto Aeropuerto", "sector": "Barbasquillo"}"#)
                .unwrap();
        let loc = Location::try_from(input).unwrap();
        assert_eq!(loc.city(), DEFAULT_CITY);
    }
}
