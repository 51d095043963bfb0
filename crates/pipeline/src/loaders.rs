//! Record loaders: one raw source in, one filtered record set out.
//!
//! Each loader streams its source through the TSV reader and hands the
//! records to its filter pipeline in fixed-size chunks, so the unfiltered
//! file is never held in memory at once. Every filter is a per-record
//! predicate, which makes the chunked result identical to filtering the
//! whole file in one go.

use crate::config::CurationConfig;
use crate::filter_pipeline::FilterPipeline;
use anyhow::{Context, Result};
use data_loader::{RatingAggregate, TitleAlias, TitleAttributes, TsvReader, TsvRecord};
use std::path::Path;
use tracing::info;

/// Parses one raw source and applies its filter pipeline.
pub struct RecordLoader<T> {
    pipeline: FilterPipeline<T>,
    chunk_size: usize,
}

impl<T: TsvRecord> RecordLoader<T> {
    pub fn new(pipeline: FilterPipeline<T>, chunk_size: usize) -> Self {
        Self {
            pipeline,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Load `T::FILE` from `dir`, keeping only records the pipeline keeps.
    ///
    /// Surviving records keep their source-file order. Any parse error aborts
    /// the load; there is no best-effort mode.
    pub fn load(&self, dir: &Path) -> Result<Vec<T>> {
        info!("Loading {}...", T::FILE);
        let reader = TsvReader::<T>::open(dir)
            .with_context(|| format!("Failed to load {}", T::FILE))?;

        let mut kept = Vec::new();
        let mut chunk = Vec::with_capacity(self.chunk_size);
        let mut read = 0usize;

        for record in reader {
            let record = record.with_context(|| format!("Failed to load {}", T::FILE))?;
            chunk.push(record);
            read += 1;

            if chunk.len() == self.chunk_size {
                let full = std::mem::replace(&mut chunk, Vec::with_capacity(self.chunk_size));
                kept.extend(self.pipeline.apply(full)?);
            }
        }
        if !chunk.is_empty() {
            kept.extend(self.pipeline.apply(chunk)?);
        }

        info!("Loaded {} of {} rows from {}", kept.len(), read, T::FILE);
        Ok(kept)
    }
}

/// The three filtered record sets a curation joins.
#[derive(Debug, Clone, Default)]
pub struct FilteredSources {
    pub titles: Vec<TitleAttributes>,
    pub aliases: Vec<TitleAlias>,
    pub ratings: Vec<RatingAggregate>,
}

impl FilteredSources {
    /// Load and filter all three sources from `dir`.
    ///
    /// The loaders share nothing, so they run in parallel. If more than one
    /// fails, the title error wins over the alias error, which wins over the
    /// rating error.
    pub fn load(dir: &Path, config: &CurationConfig) -> Result<Self> {
        let title_loader = RecordLoader::new(config.title_pipeline(), config.chunk_size);
        let alias_loader = RecordLoader::new(config.alias_pipeline(), config.chunk_size);
        let rating_loader = RecordLoader::new(config.rating_pipeline(), config.chunk_size);

        // Rayon's `join` runs two closures in parallel; nest for three
        let ((titles, aliases), ratings) = rayon::join(
            || rayon::join(|| title_loader.load(dir), || alias_loader.load(dir)),
            || rating_loader.load(dir),
        );

        Ok(Self {
            titles: titles?,
            aliases: aliases?,
            ratings: ratings?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{DataLoadError, TITLE_BASICS_FILE};
    use std::fs;
    use tempfile::TempDir;

    const BASICS_HEADER: &str = "tconst\ttitleType\tprimaryTitle\tstartYear\truntimeMinutes\tgenres\n";

    fn write_basics(dir: &TempDir, rows: &[&str]) {
        let mut contents = BASICS_HEADER.to_string();
        for row in rows {
            contents.push_str(row);
            contents.push('\n');
        }
        fs::write(dir.path().join(TITLE_BASICS_FILE), contents).unwrap();
    }

    fn title_loader(chunk_size: usize) -> RecordLoader<TitleAttributes> {
        RecordLoader::new(CurationConfig::default().title_pipeline(), chunk_size)
    }

    #[test]
    fn test_null_year_never_coerced() {
        // A `\N` year is excluded before any integer parse, even on a movie row
        let dir = TempDir::new().unwrap();
        write_basics(
            &dir,
            &[
                "t1\tmovie\tAlpha\t\\N\t120\tDrama",
                "t2\tmovie\tBeta\t1999\t95\tComedy",
            ],
        );

        let titles = title_loader(10).load(dir.path()).unwrap();
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].title_id, "t2");
    }

    #[test]
    fn test_malformed_year_aborts_load() {
        // Non-movie rows are still coerced, so their years must be valid too
        let dir = TempDir::new().unwrap();
        write_basics(
            &dir,
            &[
                "t1\tmovie\tAlpha\t1995\t120\tDrama",
                "t2\ttvEpisode\tBeta\tnineteen\t95\tComedy",
            ],
        );

        let err = title_loader(10).load(dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataLoadError>(),
            Some(DataLoadError::ParseError { line: 3, .. })
        ));
    }

    #[test]
    fn test_chunking_does_not_change_result() {
        let dir = TempDir::new().unwrap();
        write_basics(
            &dir,
            &[
                "t1\tmovie\tA\t1995\t90\tDrama",
                "t2\tshort\tB\t1995\t5\tDrama",
                "t3\tmovie\tC\t1970\t90\tDrama",
                "t4\tmovie\tD\t2001\t90\tDrama",
                "t5\tmovie\tE\t\\N\t90\tDrama",
                "t6\tmovie\tF\t1980\t90\tDrama",
            ],
        );

        let whole = title_loader(100).load(dir.path()).unwrap();
        let chunked = title_loader(2).load(dir.path()).unwrap();

        assert_eq!(whole, chunked);
        let ids: Vec<&str> = whole.iter().map(|t| t.title_id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t4", "t6"]);
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let dir = TempDir::new().unwrap();
        write_basics(&dir, &["t1\tmovie\tA\t1995\t90\tDrama"]);

        // akas and ratings are absent
        let err = FilteredSources::load(dir.path(), &CurationConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataLoadError>(),
            Some(DataLoadError::FileNotFound { .. })
        ));
    }
}
