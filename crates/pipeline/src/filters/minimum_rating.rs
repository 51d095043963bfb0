//! Filter to ensure minimum quality threshold.
//!
//! Removes titles with low average ratings or too few votes,
//! ensuring we only curate notable movies.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::RatingAggregate;

/// Removes rating aggregates below quality thresholds.
///
/// ## Algorithm
/// For each aggregate:
/// 1. Check if average_rating >= min_rating
/// 2. Check if num_votes >= min_votes
/// 3. Keep only if both conditions met
pub struct MinimumRatingFilter {
    min_rating: f64,
    min_votes: u64,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Minimum average rating (typically 6.0)
    /// * `min_votes` - Minimum number of votes (typically 100000)
    pub fn new(min_rating: f64, min_votes: u64) -> Self {
        Self {
            min_rating,
            min_votes,
        }
    }
}

impl Filter<RatingAggregate> for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(&self, ratings: Vec<RatingAggregate>) -> Result<Vec<RatingAggregate>> {
        let filtered: Vec<RatingAggregate> = ratings
            .into_iter()
            .filter(|rating| {
                rating.average_rating >= self.min_rating && rating.num_votes >= self.min_votes
            })
            .collect();

        Ok(filtered)
    }
}
