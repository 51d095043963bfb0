//! Curation pipeline for the IMDb movie catalog.
//!
//! This crate provides:
//! - Filter trait and implementations for the per-source predicates
//! - FilterPipeline for composing filters
//! - RecordLoader / FilteredSources for loading and filtering the raw export
//! - The curator that joins, deduplicates and projects the catalog
//!
//! ## Architecture
//! The pipeline processes the export in stages:
//! 1. Loaders parse each source and drop rows failing its predicates
//! 2. The curator inner-joins the three sets on titleId
//! 3. The alias fan-out is collapsed to one row per title
//! 4. The result is written to `movies.csv`
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{CurationConfig, curate_to_file};
//!
//! let outcome = curate_to_file(Path::new("data/imdb"), Path::new("./"), &CurationConfig::default())?;
//! println!("Wrote output to '{}'", outcome.output_file.display());
//! ```

pub mod config;
pub mod curator;
pub mod filter_pipeline;
pub mod filters;
pub mod loaders;
pub mod traits;

// Re-export main types
pub use config::CurationConfig;
pub use curator::{
    CurateOutcome, Curation, CurationReport, JoinedRow, curate, curate_to_file, dedup_first,
    join_sources, project,
};
pub use filter_pipeline::FilterPipeline;
pub use loaders::{FilteredSources, RecordLoader};
pub use traits::Filter;
