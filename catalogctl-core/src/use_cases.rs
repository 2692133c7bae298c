//! Application use cases, one struct per operation
//!
//! Each use case wraps the shared `RestaurantService` and adds logging.
//! The HTTP layer talks to these, never to the store directly.

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::{NewRestaurant, Restaurant, RestaurantId, RestaurantPatch, RestaurantRecord};
use crate::error::{CatalogError, Result};
use crate::service::RestaurantService;

pub struct CreateRestaurant {
    service: RestaurantService,
}

impl CreateRestaurant {
    pub fn new(service: RestaurantService) -> Self {
        Self { service }
    }

    pub async fn execute(&self, input: NewRestaurant) -> Result<Restaurant> {
        let restaurant = input.into_restaurant()?;
        let created = self.service.create_restaurant(restaurant).await?;
        info!(id = %created.id(), name = created.name(), "restaurant created");
        Ok(created)
    }
}

pub struct GetRestaurantById {
    service: RestaurantService,
}

impl GetRestaurantById {
    pub fn new(service: RestaurantService) -> Self {
        Self { service }
    }

    pub async fn execute(&self, id: &RestaurantId) -> Result<Option<Restaurant>> {
        let found = self.service.get_restaurant_by_id(id).await?;
        if found.is_none() {
            info!(%id, "restaurant not found");
        }
        Ok(found)
    }
}

pub struct GetAllRestaurants {
    service: RestaurantService,
}

impl GetAllRestaurants {
    pub fn new(service: RestaurantService) -> Self {
        Self { service }
    }

    pub async fn execute(&self) -> Result<Vec<Restaurant>> {
        let restaurants = self.service.get_all_restaurants().await?;
        info!(count = restaurants.len(), "listed restaurants");
        Ok(restaurants)
    }
}

/// Before/after view of a single update
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReport {
    pub before: RestaurantRecord,
    pub after: RestaurantRecord,
    /// camelCase field names whose value differs, `updatedAt` excluded
    pub changes: Vec<String>,
}

pub struct UpdateRestaurant {
    service: RestaurantService,
}

impl UpdateRestaurant {
    pub fn new(service: RestaurantService) -> Self {
        Self { service }
    }

    pub async fn execute(&self, id: &RestaurantId, patch: &RestaurantPatch) -> Result<Restaurant> {
        let updated = self.service.update_restaurant(id, patch).await?;
        info!(%id, "restaurant updated");
        Ok(updated)
    }

    /// Update and report which fields actually changed.
    pub async fn execute_with_comparison(
        &self,
        id: &RestaurantId,
        patch: &RestaurantPatch,
    ) -> Result<UpdateReport> {
        let before = self
            .service
            .get_restaurant_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(id))?
            .to_record();
        let after = self.execute(id, patch).await?.to_record();
        let changes = changed_fields(&before, &after)?;
        info!(%id, changes = ?changes, "compared update");
        Ok(UpdateReport {
            before,
            after,
            changes,
        })
    }
}

fn changed_fields(before: &RestaurantRecord, after: &RestaurantRecord) -> Result<Vec<String>> {
    let to_value = |record: &RestaurantRecord| {
        serde_json::to_value(record).map_err(|e| CatalogError::storage(e.to_string()))
    };
    let (Value::Object(before), Value::Object(after)) = (to_value(before)?, to_value(after)?)
    else {
        return Err(CatalogError::storage("restaurant record is not a JSON object"));
    };

    Ok(before
        .iter()
        .filter(|(key, _)| key.as_str() != "updatedAt")
        .filter(|(key, value)| after.get(key.as_str()) != Some(*value))
        .map(|(key, _)| key.clone())
        .collect())
}

/// Per-id result inside a batch delete
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteOutcome {
    pub id: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchDeleteReport {
    pub deleted: usize,
    pub failed: usize,
    pub results: Vec<DeleteOutcome>,
}

pub struct DeleteRestaurant {
    service: RestaurantService,
}

impl DeleteRestaurant {
    pub fn new(service: RestaurantService) -> Self {
        Self { service }
    }

    pub async fn execute(&self, id: &RestaurantId) -> Result<bool> {
        let deleted = self.service.delete_restaurant(id).await?;
        if deleted {
            info!(%id, "restaurant deleted");
        } else {
            info!(%id, "nothing to delete");
        }
        Ok(deleted)
    }

    /// Look the restaurant up before deleting it.
    pub async fn execute_with_confirmation(&self, id: &RestaurantId) -> Result<bool> {
        let Some(restaurant) = self.service.get_restaurant_by_id(id).await? else {
            info!(%id, "delete skipped, restaurant not found");
            return Ok(false);
        };
        info!(%id, name = restaurant.name(), "confirmed restaurant for deletion");
        self.execute(id).await
    }

    /// Like `execute`, but any error counts as "not deleted".
    pub async fn safe_delete(&self, id: &RestaurantId) -> bool {
        match self.execute(id).await {
            Ok(deleted) => deleted,
            Err(e) => {
                warn!(%id, error = %e, "delete failed");
                false
            }
        }
    }

    /// Delete each id in turn. One failure never stops the batch.
    pub async fn execute_multiple(&self, ids: &[RestaurantId]) -> BatchDeleteReport {
        let mut report = BatchDeleteReport::default();

        for id in ids {
            let outcome = match self.execute(id).await {
                Ok(true) => DeleteOutcome {
                    id: id.to_string(),
                    success: true,
                    error: None,
                },
                Ok(false) => DeleteOutcome {
                    id: id.to_string(),
                    success: false,
                    error: Some("not found".to_owned()),
                },
                Err(e) => DeleteOutcome {
                    id: id.to_string(),
                    success: false,
                    error: Some(e.to_string()),
                },
            };

            if outcome.success {
                report.deleted += 1;
            } else {
                report.failed += 1;
            }
            report.results.push(outcome);
        }

        info!(
            requested = ids.len(),
            deleted = report.deleted,
            failed = report.failed,
            "batch delete finished"
        );
        report
    }
}
