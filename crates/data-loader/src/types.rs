//! Core domain types for the IMDb export and the curated catalog.
//!
//! Each raw source gets its own record type holding only the columns we
//! select from it. All records are immutable once parsed; every stage of the
//! curation produces a new set instead of editing one in place.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases and Constants
// =============================================================================

/// Canonical identifier of a title (e.g. "tt0111161"), the join key across
/// all three sources
pub type TitleId = String;

/// Marker the export uses for a missing value
pub const NULL_SENTINEL: &str = "\\N";

/// Source file holding title attributes
pub const TITLE_BASICS_FILE: &str = "title.basics.tsv";

/// Source file holding regional title aliases
pub const TITLE_AKAS_FILE: &str = "title.akas.tsv";

/// Source file holding rating aggregates
pub const TITLE_RATINGS_FILE: &str = "title.ratings.tsv";

/// Name of the curated artifact
pub const MOVIES_FILE: &str = "movies.csv";

// =============================================================================
// Raw Source Records
// =============================================================================

/// One row of `title.basics.tsv` (`tconst` renamed to `title_id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleAttributes {
    pub title_id: TitleId,
    pub title_type: String,
    pub primary_title: String,
    /// Release year; `None` when the export carries the null sentinel
    pub start_year: Option<i32>,
    /// Carried through verbatim, may itself be the null sentinel
    pub runtime_minutes: String,
    /// Comma-delimited genre list, carried through verbatim
    pub genres: String,
}

/// One row of `title.akas.tsv`
///
/// Not unique per title: a title usually has several regional aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleAlias {
    pub title_id: TitleId,
    pub region: String,
}

/// One row of `title.ratings.tsv` (`tconst` renamed to `title_id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingAggregate {
    pub title_id: TitleId,
    pub average_rating: f64,
    pub num_votes: u64,
}

// =============================================================================
// Curated Output
// =============================================================================

/// A title that passed every filter and survived the join/dedup step.
///
/// Field names serialize to the camelCase column names of `movies.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedMovie {
    pub title_id: TitleId,
    pub primary_title: String,
    pub start_year: i32,
    pub runtime_minutes: String,
    /// Space-delimited genre list
    pub genres: String,
    pub average_rating: f64,
}

impl CuratedMovie {
    /// Header row of `movies.csv`, in column order
    pub const HEADER: [&'static str; 6] = [
        "titleId",
        "primaryTitle",
        "startYear",
        "runtimeMinutes",
        "genres",
        "averageRating",
    ];
}

/// Replace the commas of a genre list with single spaces.
///
/// The artifact uses commas as its field separator, so genres are kept
/// space-delimited inside their field.
///
/// Example: "Action,Drama" -> "Action Drama"
pub fn normalize_genres(genres: &str) -> String {
    genres.replace(',', " ")
}
