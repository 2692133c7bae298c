//! Price value object - price tier plus average spend per person

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Currency assumed when none is given
pub const DEFAULT_CURRENCY: &str = "USD";

/// Ceiling for any average price
pub const MAX_AVERAGE_PRICE: f64 = 200.0;

/// Price tier, serialized as its dollar-sign symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Economic,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Expensive,
    #[serde(rename = "$$$$")]
    VeryExpensive,
}

impl PriceRange {
    /// Inclusive band of average prices accepted for this tier.
    pub fn band(self) -> (f64, f64) {
        match self {
            Self::Economic => (0.0, 10.0),
            Self::Moderate => (10.0, 25.0),
            Self::Expensive => (25.0, 50.0),
            Self::VeryExpensive => (50.0, MAX_AVERAGE_PRICE),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Economic => "$",
            Self::Moderate => "$$",
            Self::Expensive => "$$$",
            Self::VeryExpensive => "$$$$",
        }
    }

    pub fn contains(self, average_price: f64) -> bool {
        let (min, max) = self.band();
        (min..=max).contains(&average_price)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for PriceRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "$" => Ok(Self::Economic),
            "$$" => Ok(Self::Moderate),
            "$$$" => Ok(Self::Expensive),
            "$$$$" => Ok(Self::VeryExpensive),
            _ => Err(ValidationError::InvalidFormat {
                field: "range",
                reason: "must be one of $, $$, $$$, $$$$",
            }),
        }
    }
}

/// Immutable price descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    range: PriceRange,
    average_price: f64,
    currency: String,
}

impl Price {
    /// Create a price in the default currency.
    pub fn new(range: PriceRange, average_price: f64) -> Result<Self, ValidationError> {
        Self::with_currency(range, average_price, DEFAULT_CURRENCY)
    }

    /// Create a price.
    ///
    /// The average must be positive and at most 200, then it must fall in
    /// the band of `range`.
    pub fn with_currency(
        range: PriceRange,
        average_price: f64,
        currency: &str,
    ) -> Result<Self, ValidationError> {
        // NaN fails both comparisons, so test the accepted interval positively
        if !(average_price > 0.0 && average_price <= MAX_AVERAGE_PRICE) {
            return Err(ValidationError::OutOfRange {
                field: "averagePrice",
                min: 0.0,
                max: MAX_AVERAGE_PRICE,
                value: average_price,
            });
        }

        if !range.contains(average_price) {
            return Err(ValidationError::PriceOutOfBand {
                range,
                average_price,
            });
        }

        Ok(Self {
            range,
            average_price,
            currency: currency.to_owned(),
        })
    }

    pub fn range(&self) -> PriceRange {
        self.range
    }

    pub fn average_price(&self) -> f64 {
        self.average_price
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// e.g. "USD 15.00"
    pub fn formatted_price(&self) -> String {
        format!("{} {:.2}", self.currency, self.average_price)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (average: {})", self.range, self.formatted_price())
    }
}

/// Price as it arrives in request bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceInput {
    pub range: PriceRange,
    pub average_price: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

impl TryFrom<PriceInput> for Price {
    type Error = ValidationError;

    fn try_from(input: PriceInput) -> Result<Self, Self::Error> {
        Price::with_currency(
            input.range,
            input.average_price,
            input.currency.as_deref().unwrap_or(DEFAULT_CURRENCY),
        )
    }
}

impl From<&Price> for PriceInput {
    fn from(price: &Price) -> Self {
        Self {
            range: price.range,
            average_price: price.average_price,
            currency: Some(price.currency.clone()),
        }
    }
}
