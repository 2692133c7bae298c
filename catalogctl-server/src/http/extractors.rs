//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use catalogctl_core::{RestaurantId, ValidationError};

use super::error::ApiError;

/// Extract and validate a restaurant id from path
pub struct ValidRestaurantId(pub RestaurantId);

impl<S> FromRequestParts<S> for ValidRestaurantId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        Ok(Self(RestaurantId::parse(&id)?))
    }
}

/// JSON body whose rejections are reported as 400 validation errors
///
/// Serde failures, such as an unknown price tier, happen before any domain
/// check runs.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
