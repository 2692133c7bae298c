//! Property tests for the rating and price value objects

use catalogctl_core::{Price, PriceRange, Rating, ValidationError};
use proptest::prelude::*;

fn tenths() -> impl Strategy<Value = f64> {
    (0u32..=50).prop_map(|t| f64::from(t) / 10.0)
}

fn range() -> impl Strategy<Value = PriceRange> {
    prop_oneof![
        Just(PriceRange::Economic),
        Just(PriceRange::Moderate),
        Just(PriceRange::Expensive),
        Just(PriceRange::VeryExpensive),
    ]
}

proptest! {
    #[test]
    fn add_review_is_the_rounded_weighted_mean(
        score in tenths(),
        reviews in 0u32..10_000,
        new_score in tenths(),
    ) {
        let rating = Rating::new(score, reviews).unwrap();
        let next = rating.add_review(new_score).unwrap();

        let expected = ((score * f64::from(reviews) + new_score) / f64::from(reviews + 1) * 10.0)
            .round()
            / 10.0;
        prop_assert_eq!(next.score(), expected);
        prop_assert_eq!(next.total_reviews(), reviews + 1);

        // the receiver is untouched
        prop_assert_eq!(rating.score(), score);
        prop_assert_eq!(rating.total_reviews(), reviews);
    }

    #[test]
    fn add_review_stays_between_old_and_new(
        score in tenths(),
        reviews in 1u32..1_000,
        new_score in tenths(),
    ) {
        let next = Rating::new(score, reviews).unwrap().add_review(new_score).unwrap();
        let (low, high) = if score < new_score { (score, new_score) } else { (new_score, score) };
        prop_assert!(next.score() >= low - 0.05 && next.score() <= high + 0.05);
    }

    #[test]
    fn out_of_range_scores_are_rejected(score in 5.01f64..1_000.0) {
        let is_out_of_range = matches!(
            Rating::new(score, 1),
            Err(ValidationError::OutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
        prop_assert!(Rating::unrated().add_review(-score).is_err());
    }

    #[test]
    fn price_inside_band_is_accepted(range in range(), fraction in 0.0f64..=1.0) {
        let (min, max) = range.band();
        let average = (min + (max - min) * fraction).max(0.01);
        let price = Price::new(range, average).unwrap();
        prop_assert_eq!(price.range(), range);
        prop_assert!(range.contains(price.average_price()));
    }

    #[test]
    fn economic_price_above_ten_is_rejected(average in 10.01f64..=200.0) {
        let is_band_error = matches!(
            Price::new(PriceRange::Economic, average),
            Err(ValidationError::PriceOutOfBand { .. })
        );
        prop_assert!(is_band_error);
    }

    #[test]
    fn price_outside_global_bounds_is_rejected(range in range(), average in 200.01f64..10_000.0) {
        prop_assert!(Price::new(range, average).is_err());
        prop_assert!(Price::new(range, -average).is_err());
    }
}

#[test]
fn band_edges() {
    assert!(Price::new(PriceRange::Economic, 5.0).is_ok());
    assert!(Price::new(PriceRange::Economic, 15.0).is_err());
    assert!(Price::new(PriceRange::Moderate, 10.0).is_ok());
    assert!(Price::new(PriceRange::VeryExpensive, 200.0).is_ok());
    assert!(Price::new(PriceRange::Economic, 0.0).is_err());
}
