//! Restaurant endpoints
//!
//! CRUD over `/restaurants` plus search, top-rated, statistics, reviews and
//! batch deletion.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use catalogctl_core::{
    BatchDeleteReport, NewRestaurant, Restaurant, RestaurantId, RestaurantPatch,
    RestaurantRecord, SearchFilter, Statistics, DEFAULT_TOP_LIMIT,
};

use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidRestaurantId};
use crate::http::server::AppState;

#[derive(Debug, Deserialize)]
pub struct TopParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateParams {
    /// Respond with a before/after report instead of the updated record
    #[serde(default)]
    pub compare: bool,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub score: f64,
}

#[derive(Debug, Deserialize)]
pub struct BatchDeleteRequest {
    pub ids: Vec<String>,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

fn records(restaurants: Vec<Restaurant>) -> Json<Vec<RestaurantRecord>> {
    Json(restaurants.iter().map(Restaurant::to_record).collect())
}

/// GET /restaurants - list every restaurant
async fn list_restaurants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RestaurantRecord>>, ApiError> {
    Ok(records(state.get_all.execute().await?))
}

/// POST /restaurants - create a restaurant
async fn create_restaurant(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<NewRestaurant>,
) -> Result<(StatusCode, Json<RestaurantRecord>), ApiError> {
    let created = state.create.execute(req).await?;
    Ok((StatusCode::CREATED, Json(created.to_record())))
}

/// GET /restaurants/{id} - get a single restaurant
async fn get_restaurant(
    State(state): State<Arc<AppState>>,
    ValidRestaurantId(id): ValidRestaurantId,
) -> Result<Json<RestaurantRecord>, ApiError> {
    let restaurant = state
        .get_by_id
        .execute(&id)
        .await?
        .ok_or_else(|| ApiError::restaurant_not_found(&id))?;
    Ok(Json(restaurant.to_record()))
}

/// PUT /restaurants/{id} - partial update
///
/// With `?compare=true` the body is `{before, after, changes}`.
async fn update_restaurant(
    State(state): State<Arc<AppState>>,
    ValidRestaurantId(id): ValidRestaurantId,
    Query(params): Query<UpdateParams>,
    ValidJson(patch): ValidJson<RestaurantPatch>,
) -> Result<Response, ApiError> {
    if params.compare {
        let report = state.update.execute_with_comparison(&id, &patch).await?;
        return Ok(Json(report).into_response());
    }
    let updated = state.update.execute(&id, &patch).await?;
    Ok(Json(updated.to_record()).into_response())
}

/// DELETE /restaurants/{id}
async fn delete_restaurant(
    State(state): State<Arc<AppState>>,
    ValidRestaurantId(id): ValidRestaurantId,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.delete.execute_with_confirmation(&id).await? {
        return Err(ApiError::restaurant_not_found(&id));
    }
    Ok(Json(DeleteResponse { success: true }))
}

/// GET /restaurants/search - filter by cuisine, sector and price band
///
/// Filters combine: a restaurant must match every one given.
async fn search_restaurants(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<SearchFilter>,
) -> Result<Json<Vec<RestaurantRecord>>, ApiError> {
    Ok(records(state.service.search(&filter).await?))
}

/// GET /restaurants/top - highest rated first
async fn top_rated(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopParams>,
) -> Result<Json<Vec<RestaurantRecord>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_TOP_LIMIT);
    Ok(records(state.service.get_top_rated_restaurants(limit).await?))
}

/// GET /restaurants/stats
async fn statistics(State(state): State<Arc<AppState>>) -> Result<Json<Statistics>, ApiError> {
    Ok(Json(state.service.get_statistics().await?))
}

/// POST /restaurants/{id}/reviews - fold one review into the rating
async fn add_review(
    State(state): State<Arc<AppState>>,
    ValidRestaurantId(id): ValidRestaurantId,
    ValidJson(req): ValidJson<ReviewRequest>,
) -> Result<Json<RestaurantRecord>, ApiError> {
    let updated = state
        .service
        .add_review(&id, req.score)
        .await?
        .ok_or_else(|| ApiError::restaurant_not_found(&id))?;
    tracing::info!(%id, score = req.score, "review added");
    Ok(Json(updated.to_record()))
}

/// POST /restaurants/batch-delete
async fn batch_delete(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<BatchDeleteRequest>,
) -> Result<Json<BatchDeleteReport>, ApiError> {
    let ids = req
        .ids
        .iter()
        .map(|id| RestaurantId::parse(id))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(state.delete.execute_multiple(&ids).await))
}

/// Restaurant routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/restaurants", get(list_restaurants).post(create_restaurant))
        .route("/restaurants/search", get(search_restaurants))
        .route("/restaurants/top", get(top_rated))
        .route("/restaurants/stats", get(statistics))
        .route("/restaurants/batch-delete", post(batch_delete))
        .route(
            "/restaurants/{id}",
            get(get_restaurant)
                .put(update_restaurant)
                .delete(delete_restaurant),
        )
        .route("/restaurants/{id}/reviews", post(add_review))
}
