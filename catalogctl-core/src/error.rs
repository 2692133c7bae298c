/// Structured error types for catalogctl-core.
///
/// Uses `thiserror` so the server crate can map each variant to a status
/// code. The CLI wraps these in `anyhow` for convenience.
use thiserror::Error;

use crate::domain::RestaurantId;
use crate::validation::ValidationError;

/// Main error type for catalogue operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A field violated its rule
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Duplicate id or name on create (or a rename onto a taken name)
    #[error("conflict: {reason}")]
    Conflict { reason: String },

    /// Update targeted an id that is not stored.
    ///
    /// Reads and deletes report absence through `Option`/`bool` instead.
    #[error("restaurant '{id}' not found")]
    NotFound { id: RestaurantId },

    /// Backing store failed
    #[error("storage error: {reason}")]
    Storage { reason: String },
}

/// Result type alias for catalogue operations
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    pub fn not_found(id: &RestaurantId) -> Self {
        Self::NotFound { id: id.clone() }
    }

    pub fn storage(reason: impl Into<String>) -> Self {
        Self::Storage {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::conflict("restaurant named 'Sushi Zen' already exists");
        assert_eq!(
            err.to_string(),
            "conflict: restaurant named 'Sushi Zen' already exists"
        );

        let id = RestaurantId::parse("abc").unwrap();
        assert_eq!(
            CatalogError::not_found(&id).to_string(),
            "restaurant 'abc' not found"
        );
    }

    #[test]
    fn test_validation_conversion() {
        let err: CatalogError = ValidationError::Empty { field: "name" }.into();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(err.to_string(), "validation failed: name cannot be empty");
    }
}
