//! Restaurant service - orchestration over the storage port
//!
//! Most methods forward to the store unchanged. The aggregate queries
//! (statistics, price band, top rated) scan `find_all` once.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::rating::round2;
use crate::domain::{Restaurant, RestaurantId, RestaurantPatch};
use crate::error::Result;
use crate::store::RestaurantStore;
use crate::validation::ValidationError;

/// Default number of entries for top-rated listings
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// Catalogue-wide counters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total: usize,
    pub by_cuisine: BTreeMap<String, usize>,
    pub by_sector: BTreeMap<String, usize>,
    pub average_rating: f64,
}

impl Statistics {
    /// Tally a set of restaurants.
    ///
    /// A restaurant with N cuisine labels counts once in each of N buckets;
    /// sectors get one count per restaurant.
    pub fn collect<'a>(restaurants: impl IntoIterator<Item = &'a Restaurant>) -> Self {
        let mut by_cuisine = BTreeMap::new();
        let mut by_sector = BTreeMap::new();
        let mut total = 0usize;
        let mut score_sum = 0.0;

        for restaurant in restaurants {
            for label in restaurant.cuisine_labels() {
                *by_cuisine.entry(label.to_owned()).or_insert(0) += 1;
            }
            *by_sector
                .entry(restaurant.location().sector().to_owned())
                .or_insert(0) += 1;
            score_sum += restaurant.rating().score();
            total += 1;
        }

        let average_rating = if total == 0 {
            0.0
        } else {
            round2(score_sum / total as f64)
        };

        Self {
            total,
            by_cuisine,
            by_sector,
            average_rating,
        }
    }
}

/// Search criteria; a restaurant must match every filter given.
///
/// Blank text filters count as absent. A missing price bound is open on
/// that side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchFilter {
    pub cuisine: Option<String>,
    pub sector: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SearchFilter {
    fn cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref().filter(|s| !s.trim().is_empty())
    }

    fn sector(&self) -> Option<&str> {
        self.sector.as_deref().filter(|s| !s.trim().is_empty())
    }

    fn price_band(&self) -> Option<(f64, f64)> {
        if self.min_price.is_none() && self.max_price.is_none() {
            return None;
        }
        Some((
            self.min_price.unwrap_or(0.0),
            self.max_price.unwrap_or(f64::MAX),
        ))
    }
}

/// Keep only the entries of `current` that also appear in `matches`.
fn narrow(current: Option<Vec<Restaurant>>, matches: Vec<Restaurant>) -> Vec<Restaurant> {
    match current {
        None => matches,
        Some(mut current) => {
            current.retain(|r| matches.iter().any(|m| m.id() == r.id()));
            current
        }
    }
}

#[derive(Clone)]
pub struct RestaurantService {
    store: Arc<dyn RestaurantStore>,
}

impl RestaurantService {
    pub fn new(store: Arc<dyn RestaurantStore>) -> Self {
        Self { store }
    }

    pub async fn create_restaurant(&self, restaurant: Restaurant) -> Result<Restaurant> {
        self.store.create(restaurant).await
    }

    pub async fn get_all_restaurants(&self) -> Result<Vec<Restaurant>> {
        self.store.find_all().await
    }

    pub async fn get_restaurant_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>> {
        self.store.find_by_id(id).await
    }

    pub async fn get_restaurants_by_cuisine(&self, cuisine: &str) -> Result<Vec<Restaurant>> {
        self.store.find_by_cuisine(cuisine).await
    }

    pub async fn get_restaurants_by_sector(&self, sector: &str) -> Result<Vec<Restaurant>> {
        self.store.find_by_sector(sector).await
    }

    pub async fn update_restaurant(
        &self,
        id: &RestaurantId,
        patch: &RestaurantPatch,
    ) -> Result<Restaurant> {
        self.store.update(id, patch).await
    }

    pub async fn delete_restaurant(&self, id: &RestaurantId) -> Result<bool> {
        self.store.delete(id).await
    }

    pub async fn count(&self) -> Result<usize> {
        self.store.count().await
    }

    pub async fn exists(&self, id: &RestaurantId) -> Result<bool> {
        self.store.exists(id).await
    }

    /// Fold a review score into a restaurant's rating.
    ///
    /// `None` when the restaurant does not exist.
    pub async fn add_review(&self, id: &RestaurantId, score: f64) -> Result<Option<Restaurant>> {
        self.store.add_review(id, score).await
    }

    pub async fn get_statistics(&self) -> Result<Statistics> {
        let restaurants = self.store.find_all().await?;
        Ok(Statistics::collect(&restaurants))
    }

    /// Restaurants whose average price lies in `min..=max`.
    pub async fn get_restaurants_by_price_range(
        &self,
        min: f64,
        max: f64,
    ) -> Result<Vec<Restaurant>> {
        let mut restaurants = self.store.find_all().await?;
        restaurants.retain(|r| (min..=max).contains(&r.price().average_price()));
        Ok(restaurants)
    }

    /// Restaurants matching every filter in `filter`.
    ///
    /// Fails when no filter is given or when the price bounds are inverted.
    pub async fn search(&self, filter: &SearchFilter) -> Result<Vec<Restaurant>> {
        let band = filter.price_band();
        if filter.cuisine().is_none() && filter.sector().is_none() && band.is_none() {
            return Err(ValidationError::Empty {
                field: "search filter",
            }
            .into());
        }
        if let Some((min, max)) = band {
            if min > max {
                return Err(ValidationError::InvalidFormat {
                    field: "min_price",
                    reason: "must not exceed max_price",
                }
                .into());
            }
        }

        let mut hits = None;
        if let Some(cuisine) = filter.cuisine() {
            hits = Some(narrow(hits, self.get_restaurants_by_cuisine(cuisine).await?));
        }
        if let Some(sector) = filter.sector() {
            hits = Some(narrow(hits, self.get_restaurants_by_sector(sector).await?));
        }
        if let Some((min, max)) = band {
            hits = Some(narrow(hits, self.get_restaurants_by_price_range(min, max).await?));
        }
        Ok(hits.unwrap_or_default())
    }

    /// Highest scores first; ties keep insertion order.
    pub async fn get_top_rated_restaurants(&self, limit: usize) -> Result<Vec<Restaurant>> {
        let mut restaurants = self.store.find_all().await?;
        // sort_by is stable
        restaurants.sort_by(|a, b| b.rating().score().total_cmp(&a.rating().score()));
        restaurants.truncate(limit);
        Ok(restaurants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::restaurant::tests::draft;
    use crate::domain::{Location, Price, PriceRange, Rating};
    use crate::error::CatalogError;
    use crate::store::InMemoryStore;

    fn service_with(restaurants: Vec<Restaurant>) -> RestaurantService {
        let store = InMemoryStore::from_restaurants(restaurants).unwrap();
        RestaurantService::new(Arc::new(store))
    }

    fn rated(name: &str, score: f64) -> Restaurant {
        let mut d = draft(name);
        d.rating = Rating::new(score, 10).unwrap();
        Restaurant::new(d).unwrap()
    }

    #[tokio::test]
    async fn empty_statistics() {
        let service = service_with(vec![]);
        let stats = service.get_statistics().await.unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_rating, 0.0);
        assert!(stats.by_cuisine.is_empty());
        assert!(stats.by_sector.is_empty());
    }

    #[tokio::test]
    async fn statistics_tally_every_label() {
        let mut second = draft("Sushi Zen");
        second.cuisine = vec!["Japonesa".into(), "Mariscos".into()];
        second.location = Location::new("Mall del Pacífico", "La Delicia").unwrap();
        second.rating = Rating::new(4.0, 5).unwrap();

        let mut first = draft("El Pescador");
        first.rating = Rating::new(4.7, 5).unwrap();

        let service = service_with(vec![
            Restaurant::new(first).unwrap(),
            Restaurant::new(second).unwrap(),
        ]);
        let stats = service.get_statistics().await.unwrap();

        assert_eq!(stats.total, 2);
        assert_eq!(stats.by_cuisine["Mariscos"], 2);
        assert_eq!(stats.by_cuisine["Ecuatoriana"], 1);
        assert_eq!(stats.by_cuisine["Japonesa"], 1);
        assert_eq!(stats.by_sector["Tarqui"], 1);
        assert_eq!(stats.by_sector["La Delicia"], 1);
        assert_eq!(stats.average_rating, 4.35);
    }

    #[tokio::test]
    async fn average_is_rounded_to_two_decimals() {
        let service = service_with(vec![rated("Uno", 4.0), rated("Dos", 4.0), rated("Tres", 4.1)]);
        let stats = service.get_statistics().await.unwrap();
        // 12.1 / 3 = 4.0333...
        assert_eq!(stats.average_rating, 4.03);
    }

    #[tokio::test]
    async fn top_rated_sorted_and_truncated() {
        let service = service_with(vec![
            rated("Uno", 3.0),
            rated("Dos", 4.8),
            rated("Tres", 4.1),
            rated("Cuatro", 4.8),
            rated("Cinco", 2.0),
        ]);

        let top = service.get_top_rated_restaurants(3).await.unwrap();
        let names: Vec<_> = top.iter().map(|r| r.name()).collect();
        // equal scores keep insertion order
        assert_eq!(names, ["Dos", "Cuatro", "Tres"]);

        let again = service.get_top_rated_restaurants(3).await.unwrap();
        let again_names: Vec<_> = again.iter().map(|r| r.name()).collect();
        assert_eq!(names, again_names);

        assert_eq!(service.get_top_rated_restaurants(50).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn price_range_is_inclusive() {
        let mut cheap = draft("Barato");
        cheap.price = Price::new(PriceRange::Economic, 8.0).unwrap();
        let mut mid = draft("Medio");
        mid.price = Price::new(PriceRange::Moderate, 15.0).unwrap();
        let mut pricey = draft("Caro");
        pricey.price = Price::new(PriceRange::VeryExpensive, 65.0).unwrap();

        let service = service_with(vec![
            Restaurant::new(cheap).unwrap(),
            Restaurant::new(mid).unwrap(),
            Restaurant::new(pricey).unwrap(),
        ]);

        let hits = service.get_restaurants_by_price_range(8.0, 15.0).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert!(service
            .get_restaurants_by_price_range(100.0, 200.0)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn search_requires_a_non_blank_filter() {
        let service = service_with(vec![rated("Uno", 4.0)]);

        let err = service.search(&SearchFilter::default()).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::Empty { field: "search filter" })
        ));

        let blank = SearchFilter {
            cuisine: Some("   ".into()),
            sector: Some(String::new()),
            ..SearchFilter::default()
        };
        assert!(service.search(&blank).await.is_err());
    }

    #[tokio::test]
    async fn search_rejects_inverted_price_band() {
        let service = service_with(vec![rated("Uno", 4.0)]);
        let filter = SearchFilter {
            min_price: Some(40.0),
            max_price: Some(20.0),
            ..SearchFilter::default()
        };
        let err = service.search(&filter).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::InvalidFormat { field: "min_price", .. })
        ));
    }

    #[tokio::test]
    async fn search_filters_combine() {
        let mut seafood = draft("Mar Abierto");
        seafood.cuisine = vec!["Mariscos".into()];
        seafood.price = Price::new(PriceRange::Moderate, 15.0).unwrap();
        let mut pricey_seafood = draft("Langosta Real");
        pricey_seafood.cuisine = vec!["Mariscos".into()];
        pricey_seafood.price = Price::new(PriceRange::VeryExpensive, 65.0).unwrap();
        let mut grill = draft("Brasa");
        grill.cuisine = vec!["Parrilla".into()];
        grill.price = Price::new(PriceRange::Moderate, 12.0).unwrap();

        let service = service_with(vec![
            Restaurant::new(seafood).unwrap(),
            Restaurant::new(pricey_seafood).unwrap(),
            Restaurant::new(grill).unwrap(),
        ]);

        let filter = SearchFilter {
            cuisine: Some("mariscos".into()),
            max_price: Some(20.0),
            ..SearchFilter::default()
        };
        let hits = service.search(&filter).await.unwrap();
        let names: Vec<_> = hits.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Mar Abierto"]);

        // a blank cuisine is ignored, the price bound still applies
        let filter = SearchFilter {
            cuisine: Some(" ".into()),
            min_price: Some(50.0),
            ..SearchFilter::default()
        };
        let hits = service.search(&filter).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Langosta Real");
    }

    #[tokio::test]
    async fn add_review_updates_stored_rating() {
        let restaurant = rated("Uno", 4.0);
        let id = restaurant.id().clone();
        let service = service_with(vec![restaurant]);

        let updated = service.add_review(&id, 5.0).await.unwrap().unwrap();
        assert_eq!(updated.rating().total_reviews(), 11);
        // (40 + 5) / 11 = 4.09 -> 4.1
        assert_eq!(updated.rating().score(), 4.1);

        let missing = RestaurantId::parse("missing").unwrap();
        assert!(service.add_review(&missing, 5.0).await.unwrap().is_none());

        let err = service.add_review(&id, 9.0).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }
}
