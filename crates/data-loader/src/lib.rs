//! # Data Loader Crate
//!
//! This crate handles reading the IMDb TSV export and the curated
//! `movies.csv` artifact.
//!
//! ## Main Components
//!
//! - **types**: Record types (TitleAttributes, TitleAlias, RatingAggregate, CuratedMovie)
//! - **parser**: Stream typed records out of the raw .tsv files
//! - **artifact**: Write and read `movies.csv`
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{TitleAlias, TsvReader};
//! use std::path::Path;
//!
//! let us_aliases = TsvReader::<TitleAlias>::open(Path::new("data/imdb"))?
//!     .filter(|alias| matches!(alias, Ok(a) if a.region == "US"))
//!     .collect::<data_loader::Result<Vec<_>>>()?;
//! ```

// Public modules
pub mod artifact;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use artifact::{read_movies, write_movies};
pub use error::{DataLoadError, Result};
pub use parser::{TsvReader, TsvRecord, parse_nullable};
pub use types::{
    // Type aliases
    TitleId,
    // Records
    CuratedMovie,
    RatingAggregate,
    TitleAlias,
    TitleAttributes,
    // Constants
    MOVIES_FILE,
    NULL_SENTINEL,
    TITLE_AKAS_FILE,
    TITLE_BASICS_FILE,
    TITLE_RATINGS_FILE,
    normalize_genres,
};
