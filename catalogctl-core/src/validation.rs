//! Validation error types

use thiserror::Error;

use crate::domain::PriceRange;

/// Validation error for domain values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Field is empty (or only whitespace) when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Field is shorter than its minimum length
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// Field exceeds maximum length
    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// List field has more entries than allowed
    #[error("{field} cannot have more than {max} entries")]
    TooMany { field: &'static str, max: usize },

    /// Numeric field outside its allowed interval
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// String doesn't match required format
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Average price falls outside the band of its price range
    #[error("average price {average_price} does not match price range {range}")]
    PriceOutOfBand {
        range: PriceRange,
        average_price: f64,
    },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::TooMany { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::InvalidFormat { field, .. } => field,
            Self::PriceOutOfBand { .. } => "averagePrice",
        }
    }
}

/// Reject empty or whitespace-only text.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Reject text shorter than `min` characters (counted as chars, not bytes).
pub(crate) fn require_min_len(
    field: &'static str,
    value: &str,
    min: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "name",
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "name exceeds maximum length of 100 characters"
        );

        let err = ValidationError::OutOfRange {
            field: "capacity",
            min: 10.0,
            max: 500.0,
            value: 5.0,
        };
        assert_eq!(err.to_string(), "capacity must be between 10 and 500 (got 5)");
    }

    #[test]
    fn band_error_names_range() {
        let err = ValidationError::PriceOutOfBand {
            range: PriceRange::Economic,
            average_price: 15.0,
        };
        assert_eq!(
            err.to_string(),
            "average price 15 does not match price range $"
        );
        assert_eq!(err.field(), "averagePrice");
    }

    #[test]
    fn whitespace_is_empty() {
        assert!(matches!(
            require_text("sector", "   "),
            Err(ValidationError::Empty { field: "sector" })
        ));
    }

    #[test]
    fn min_len_counts_chars() {
        // "Ñuñ" is three chars but more than three bytes
        assert!(require_min_len("name", "Ñuñ", 3).is_ok());
        assert!(require_min_len("name", "ab", 3).is_err());
    }
}
