//! Reading and writing the curated `movies.csv` artifact.
//!
//! The artifact is the only durable output of a curation run and the only
//! input of a publish run.

use crate::error::{DataLoadError, Result};
use crate::types::{CuratedMovie, MOVIES_FILE};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write the curated movies to `<output_dir>/movies.csv`.
///
/// Rows go to a temporary file first, which is renamed into place once every
/// row is written. A failed run never leaves a partial `movies.csv` behind.
/// The header is written even when `movies` is empty.
pub fn write_movies(output_dir: &Path, movies: &[CuratedMovie]) -> Result<PathBuf> {
    if !output_dir.is_dir() {
        return Err(DataLoadError::FileNotFound {
            path: output_dir.display().to_string(),
        });
    }

    let final_path = output_dir.join(MOVIES_FILE);
    let tmp_path = output_dir.join(format!("{}.tmp", MOVIES_FILE));

    if let Err(e) = write_rows(&tmp_path, movies) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    fs::rename(&tmp_path, &final_path)?;

    debug!("Wrote {} rows to {}", movies.len(), final_path.display());
    Ok(final_path)
}

fn write_rows(path: &Path, movies: &[CuratedMovie]) -> Result<()> {
    // Header is written by hand so an empty result still gets one
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(CuratedMovie::HEADER)?;
    for movie in movies {
        writer.serialize(movie)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read `<dir>/movies.csv` back into curated movies, in file order.
pub fn read_movies(dir: &Path) -> Result<Vec<CuratedMovie>> {
    let path = dir.join(MOVIES_FILE);
    if !path.is_file() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut reader = ReaderBuilder::new().from_path(&path)?;
    let movies = reader
        .deserialize()
        .collect::<std::result::Result<Vec<CuratedMovie>, csv::Error>>()?;

    debug!("Read {} rows from {}", movies.len(), path.display());
    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn alpha() -> CuratedMovie {
        CuratedMovie {
            title_id: "t1".to_string(),
            primary_title: "Alpha".to_string(),
            start_year: 1995,
            runtime_minutes: "120".to_string(),
            genres: "Action Drama".to_string(),
            average_rating: 7.2,
        }
    }

    #[test]
    fn test_write_movies_layout() {
        let dir = TempDir::new().unwrap();
        let path = write_movies(dir.path(), &[alpha()]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("titleId,primaryTitle,startYear,runtimeMinutes,genres,averageRating")
        );
        assert_eq!(lines.next(), Some("t1,Alpha,1995,120,Action Drama,7.2"));
        assert_eq!(lines.next(), None);
        assert!(!dir.path().join("movies.csv.tmp").exists());
    }

    #[test]
    fn test_title_with_comma_is_quoted() {
        let dir = TempDir::new().unwrap();
        let mut movie = alpha();
        movie.primary_title = "Crouching Tiger, Hidden Dragon".to_string();
        movie.average_rating = 8.0;

        let path = write_movies(dir.path(), &[movie.clone()]).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"Crouching Tiger, Hidden Dragon\""));
        assert!(contents.ends_with(",8.0\n"));

        assert_eq!(read_movies(dir.path()).unwrap(), vec![movie]);
    }

    #[test]
    fn test_empty_result_still_has_header() {
        let dir = TempDir::new().unwrap();
        let path = write_movies(dir.path(), &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), CuratedMovie::HEADER.join(","));
        assert!(read_movies(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_output_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = write_movies(&missing, &[alpha()]).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_read_missing_artifact() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            read_movies(dir.path()),
            Err(DataLoadError::FileNotFound { .. })
        ));
    }
}
