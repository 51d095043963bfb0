//! # Curator
//!
//! Turns the three filtered record sets into the curated catalog:
//! 1. Inner-join titles with aliases on titleId (the US/GB release gate)
//! 2. Inner-join the result with ratings on titleId
//! 3. Collapse the alias fan-out to one row per titleId, first row wins
//! 4. Project to the six output columns, normalizing genres
//!
//! ## Row order and "first"
//!
//! The join walks titles in source-row order and, for each title, its
//! aliases in source-row order. Dedup keeps the earliest joined row, so the
//! surviving row is the one built from the earliest alias row of the title.
//! None of the projected columns come from the alias, which makes every
//! joined row of a title project to the same curated movie; the tie-break is
//! fixed anyway so that it stays stable if an alias column is ever projected.
//!
//! The curated set is emitted sorted by titleId.

use crate::config::CurationConfig;
use crate::loaders::FilteredSources;
use anyhow::{Context, Result};
use data_loader::{
    CuratedMovie, RatingAggregate, TitleAlias, TitleAttributes, normalize_genres, write_movies,
};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// One row of the title × alias × rating join, borrowed from the sources
#[derive(Debug, Clone, Copy)]
pub struct JoinedRow<'a> {
    pub title: &'a TitleAttributes,
    pub alias: &'a TitleAlias,
    pub rating: &'a RatingAggregate,
}

/// Per-stage row counts of one curation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurationReport {
    pub titles: usize,
    pub aliases: usize,
    pub ratings: usize,
    pub joined_rows: usize,
    pub curated: usize,
}

/// Result of curating a set of filtered sources
#[derive(Debug, Clone)]
pub struct Curation {
    pub movies: Vec<CuratedMovie>,
    pub report: CurationReport,
}

/// Inner-join the three sets on titleId.
///
/// A title yields one row per matching alias; titles missing from either the
/// alias or the rating set yield nothing. Row order is title order, then alias
/// order within a title.
pub fn join_sources(sources: &FilteredSources) -> Vec<JoinedRow<'_>> {
    // Any empty side means an empty join
    if sources.titles.is_empty() || sources.aliases.is_empty() || sources.ratings.is_empty() {
        return Vec::new();
    }

    let mut aliases_by_title: HashMap<&str, Vec<&TitleAlias>> = HashMap::new();
    for alias in &sources.aliases {
        aliases_by_title
            .entry(alias.title_id.as_str())
            .or_default()
            .push(alias);
    }

    // Ratings are unique per title in the export; keep the first if not
    let mut rating_by_title: HashMap<&str, &RatingAggregate> = HashMap::new();
    for rating in &sources.ratings {
        rating_by_title
            .entry(rating.title_id.as_str())
            .or_insert(rating);
    }

    let mut rows = Vec::new();
    for title in &sources.titles {
        let key = title.title_id.as_str();
        let Some(aliases) = aliases_by_title.get(key) else {
            continue;
        };
        let Some(&rating) = rating_by_title.get(key) else {
            continue;
        };
        for &alias in aliases {
            rows.push(JoinedRow {
                title,
                alias,
                rating,
            });
        }
    }
    rows
}

/// Keep the first row per titleId in the given order, dropping the rest.
pub fn dedup_first<'a>(rows: Vec<JoinedRow<'a>>) -> Vec<JoinedRow<'a>> {
    let mut seen: HashSet<&'a str> = HashSet::with_capacity(rows.len());
    rows.into_iter()
        .filter(|row| seen.insert(row.title.title_id.as_str()))
        .collect()
}

/// Project a joined row to the output schema.
///
/// Returns `None` for a title without a release year; the year filter
/// removes those before the join, so this only guards direct callers.
pub fn project(row: &JoinedRow<'_>) -> Option<CuratedMovie> {
    Some(CuratedMovie {
        title_id: row.title.title_id.clone(),
        primary_title: row.title.primary_title.clone(),
        start_year: row.title.start_year?,
        runtime_minutes: row.title.runtime_minutes.clone(),
        genres: normalize_genres(&row.title.genres),
        average_rating: row.rating.average_rating,
    })
}

/// Join, dedup and project the filtered sources.
///
/// An empty input set is not an error; it simply yields an empty catalog.
pub fn curate(sources: &FilteredSources) -> Curation {
    let joined = join_sources(sources);
    let joined_rows = joined.len();

    let mut movies: Vec<CuratedMovie> = dedup_first(joined).iter().filter_map(project).collect();
    movies.sort_by(|a, b| a.title_id.cmp(&b.title_id));

    let report = CurationReport {
        titles: sources.titles.len(),
        aliases: sources.aliases.len(),
        ratings: sources.ratings.len(),
        joined_rows,
        curated: movies.len(),
    };
    info!(
        "Curated {} movies from {} joined rows ({} titles, {} aliases, {} ratings)",
        report.curated, report.joined_rows, report.titles, report.aliases, report.ratings
    );

    Curation { movies, report }
}

/// Outcome of a full curate run
#[derive(Debug, Clone)]
pub struct CurateOutcome {
    pub output_file: PathBuf,
    pub report: CurationReport,
}

/// Load the export from `source_dir`, curate it and write `movies.csv` into
/// `output_dir`.
///
/// Nothing is written unless loading and curation both succeed.
pub fn curate_to_file(
    source_dir: &Path,
    output_dir: &Path,
    config: &CurationConfig,
) -> Result<CurateOutcome> {
    let start = Instant::now();

    let sources = FilteredSources::load(source_dir, config)
        .with_context(|| format!("Failed to load IMDb export from {}", source_dir.display()))?;

    info!("Joining....");
    let curation = curate(&sources);

    let output_file = write_movies(output_dir, &curation.movies)
        .with_context(|| format!("Failed to write output to {}", output_dir.display()))?;

    info!("Curation finished in {:?}", start.elapsed());
    Ok(CurateOutcome {
        output_file,
        report: curation.report,
    })
}
