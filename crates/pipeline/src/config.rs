//! Thresholds and allow-lists used by the record loaders.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{MinimumRatingFilter, RegionFilter, ReleaseYearFilter, TitleTypeFilter};
use data_loader::{RatingAggregate, TitleAlias, TitleAttributes};

/// Earliest release year curated
pub const MIN_START_YEAR: i32 = 1980;

/// Minimum average rating of a curated title
pub const MIN_AVERAGE_RATING: f64 = 6.0;

/// Minimum vote count of a curated title
pub const MIN_NUM_VOTES: u64 = 100_000;

/// Rows handed to a filter pipeline at once while streaming a source
pub const DEFAULT_CHUNK_SIZE: usize = 100_000;

/// Settings for one curation run.
///
/// `Default` gives the catalog's standard thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct CurationConfig {
    pub min_start_year: i32,
    pub title_type: String,
    pub regions: Vec<String>,
    pub min_average_rating: f64,
    pub min_num_votes: u64,
    pub chunk_size: usize,
}

impl Default for CurationConfig {
    fn default() -> Self {
        Self {
            min_start_year: MIN_START_YEAR,
            title_type: "movie".to_string(),
            regions: vec!["US".to_string(), "GB".to_string()],
            min_average_rating: MIN_AVERAGE_RATING,
            min_num_votes: MIN_NUM_VOTES,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl CurationConfig {
    /// Year predicate first, then type. Both are pure, so the order only
    /// affects the debug counts.
    pub fn title_pipeline(&self) -> FilterPipeline<TitleAttributes> {
        FilterPipeline::new()
            .add_filter(ReleaseYearFilter::new(self.min_start_year))
            .add_filter(TitleTypeFilter::new(self.title_type.clone()))
    }

    pub fn alias_pipeline(&self) -> FilterPipeline<TitleAlias> {
        FilterPipeline::new().add_filter(RegionFilter::new(self.regions.iter().cloned()))
    }

    pub fn rating_pipeline(&self) -> FilterPipeline<RatingAggregate> {
        FilterPipeline::new()
            .add_filter(MinimumRatingFilter::new(self.min_average_rating, self.min_num_votes))
    }
}
