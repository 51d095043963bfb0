//! Filter implementations for the record loaders.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod minimum_rating;
pub mod region;
pub mod release_year;
pub mod title_type;

// Re-export for convenience
pub use minimum_rating::MinimumRatingFilter;
pub use region::RegionFilter;
pub use release_year::ReleaseYearFilter;
pub use title_type::TitleTypeFilter;
