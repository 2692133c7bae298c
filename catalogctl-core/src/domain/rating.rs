//! Rating value object - average review score and review count

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Highest possible score
pub const MAX_SCORE: f64 = 5.0;

const FULL_STAR: char = '★';
const HALF_STAR: char = '½';
const EMPTY_STAR: char = '☆';

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Immutable rating. Adding a review yields a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    score: f64,
    total_reviews: u32,
}

impl Rating {
    /// Create a rating.
    ///
    /// # Rules
    /// - score within 0.0..=5.0
    /// - at most one decimal digit (4.5 ok, 4.55 rejected)
    pub fn new(score: f64, total_reviews: u32) -> Result<Self, ValidationError> {
        validate_score(score)?;
        Ok(Self {
            score,
            total_reviews,
        })
    }

    /// A restaurant nobody has reviewed yet.
    pub fn unrated() -> Self {
        Self {
            score: 0.0,
            total_reviews: 0,
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn total_reviews(&self) -> u32 {
        self.total_reviews
    }

    /// Fold one more review into the average.
    ///
    /// `self` is left untouched; the returned rating carries the recomputed
    /// average (rounded to one decimal) and one more review.
    pub fn add_review(&self, new_score: f64) -> Result<Self, ValidationError> {
        validate_score(new_score)?;

        let total_score = self.score * f64::from(self.total_reviews) + new_score;
        let total_reviews = self.total_reviews.saturating_add(1);
        let average = round1(total_score / f64::from(total_reviews));

        Self::new(average, total_reviews)
    }

    /// Five glyphs: full stars, an optional half star, then empty stars.
    pub fn stars(&self) -> String {
        // score is validated to 0..=5, so the cast cannot truncate anything meaningful
        let full = self.score.floor() as usize;
        let half = self.score.fract() >= 0.5;
        let empty = 5 - full - usize::from(half);

        let mut out = String::with_capacity(5 * FULL_STAR.len_utf8());
        out.extend(std::iter::repeat(FULL_STAR).take(full));
        if half {
            out.push(HALF_STAR);
        }
        out.extend(std::iter::repeat(EMPTY_STAR).take(empty));
        out
    }

    /// Quality tier derived from the score.
    pub fn quality(&self) -> &'static str {
        match self.score {
            s if s >= 4.5 => "Excellent",
            s if s >= 4.0 => "Very Good",
            s if s >= 3.5 => "Good",
            s if s >= 3.0 => "Regular",
            _ => "Low",
        }
    }

    /// Structured view including the derived fields.
    pub fn to_record(&self) -> RatingRecord {
        RatingRecord {
            score: self.score,
            total_reviews: self.total_reviews,
            stars: self.stars(),
            quality: self.quality().to_owned(),
        }
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::unrated()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/5 stars ({} reviews) - {}",
            self.score,
            self.total_reviews,
            self.quality()
        )
    }
}

fn validate_score(score: f64) -> Result<(), ValidationError> {
    if !(0.0..=MAX_SCORE).contains(&score) {
        return Err(ValidationError::OutOfRange {
            field: "score",
            min: 0.0,
            max: MAX_SCORE,
            value: score,
        });
    }
    if round1(score) != score {
        return Err(ValidationError::InvalidFormat {
            field: "score",
            reason: "at most one decimal digit allowed",
        });
    }
    Ok(())
}

/// Serialized rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    pub score: f64,
    pub total_reviews: u32,
    pub stars: String,
    pub quality: String,
}

/// Rating as it arrives in request bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingInput {
    pub score: f64,
    #[serde(default)]
    pub total_reviews: u32,
}

impl TryFrom<RatingInput> for Rating {
    type Error = ValidationError;

    fn try_from(input: RatingInput) -> Result<Self, Self::Error> {
        Rating::new(input.score, input.total_reviews)
    }
}

impl From<Rating> for RatingInput {
    fn from(rating: Rating) -> Self {
        Self {
            score: rating.score,
            total_reviews: rating.total_reviews,
        }
    }
}
