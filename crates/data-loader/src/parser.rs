//! Parser for the IMDb TSV export.
//!
//! Handles the three raw sources:
//! - title.basics.tsv: tconst, titleType, primaryTitle, startYear, runtimeMinutes, genres, ...
//! - title.akas.tsv: titleId, region, ...
//! - title.ratings.tsv: tconst, averageRating, numVotes
//!
//! Columns are located by header name and everything else is ignored. The
//! files are read as a stream of typed records so a caller can filter them
//! without holding the whole (very large) alias file in memory.
//!
//! Null handling: a field that may carry the null sentinel is compared with it
//! BEFORE any numeric coercion. Coercing `\N` is a hard error, so the order
//! matters; see [`parse_nullable`].

use crate::error::{DataLoadError, Result};
use crate::types::*;
use csv::{ReaderBuilder, StringRecord};
use std::fmt::Display;
use std::fs::File;
use std::marker::PhantomData;
use std::path::Path;
use std::str::FromStr;

/// A record type that can be read from one of the raw TSV sources.
pub trait TsvRecord: Sized {
    /// File name inside the source directory
    const FILE: &'static str;

    /// Header names of the columns to select, in the order `from_fields` expects
    const COLUMNS: &'static [&'static str];

    /// Build a record from the selected fields of one row.
    ///
    /// `fields` has exactly one entry per name in `COLUMNS`.
    fn from_fields(fields: &[&str], line: u64) -> Result<Self>;
}

/// Streaming reader over one raw source, yielding typed records.
pub struct TsvReader<T> {
    reader: csv::Reader<File>,
    indices: Vec<usize>,
    record: StringRecord,
    _marker: PhantomData<T>,
}

impl<T: TsvRecord> TsvReader<T> {
    /// Open `T::FILE` inside `dir` and resolve the selected columns.
    ///
    /// Fails if the file is missing or its header lacks a selected column.
    pub fn open(dir: &Path) -> Result<Self> {
        let path = dir.join(T::FILE);
        if !path.is_file() {
            return Err(DataLoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        // The export never quotes fields but titles do contain '"'
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .from_path(&path)?;

        let headers = reader.headers()?.clone();
        let indices = T::COLUMNS
            .iter()
            .map(|column| {
                headers
                    .iter()
                    .position(|header| header == *column)
                    .ok_or_else(|| DataLoadError::MissingColumn {
                        file: T::FILE.to_string(),
                        column: column.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            reader,
            indices,
            record: StringRecord::new(),
            _marker: PhantomData,
        })
    }

    fn parse_current(&self) -> Result<T> {
        let line = self.record.position().map(|p| p.line()).unwrap_or(0);

        let mut fields = Vec::with_capacity(self.indices.len());
        for (&idx, column) in self.indices.iter().zip(T::COLUMNS) {
            let field = self.record.get(idx).ok_or_else(|| DataLoadError::ParseError {
                file: T::FILE.to_string(),
                line,
                reason: format!("Missing {}", column),
            })?;
            fields.push(field);
        }

        T::from_fields(&fields, line)
    }
}

impl<T: TsvRecord> Iterator for TsvReader<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(self.parse_current()),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}

// =============================================================================
// Field Helpers
// =============================================================================

/// Coerce a raw field to a number, reporting file/line on failure
fn parse_field<V>(raw: &str, file: &str, line: u64, column: &str) -> Result<V>
where
    V: FromStr,
    V::Err: Display,
{
    raw.parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid {} '{}': {}", column, raw, e),
    })
}

/// Coerce a field that may carry the null sentinel.
///
/// The sentinel check runs first and maps to `None`; only other values reach
/// `FromStr`. A non-sentinel value that fails to parse is an error.
///
/// Example: "1995" -> Ok(Some(1995))
///          "\N"   -> Ok(None)
///          "19x5" -> Err(ParseError)
pub fn parse_nullable<V>(raw: &str, file: &str, line: u64, column: &str) -> Result<Option<V>>
where
    V: FromStr,
    V::Err: Display,
{
    if raw == NULL_SENTINEL {
        return Ok(None);
    }
    parse_field(raw, file, line, column).map(Some)
}

/// Join keys are never empty
fn parse_title_id(raw: &str, file: &str, line: u64) -> Result<TitleId> {
    if raw.is_empty() {
        return Err(DataLoadError::ParseError {
            file: file.to_string(),
            line,
            reason: "Empty titleId".to_string(),
        });
    }
    Ok(raw.to_string())
}

// =============================================================================
// Source Records
// =============================================================================

impl TsvRecord for TitleAttributes {
    const FILE: &'static str = TITLE_BASICS_FILE;
    const COLUMNS: &'static [&'static str] = &[
        "tconst",
        "titleType",
        "primaryTitle",
        "startYear",
        "runtimeMinutes",
        "genres",
    ];

    fn from_fields(fields: &[&str], line: u64) -> Result<Self> {
        Ok(TitleAttributes {
            title_id: parse_title_id(fields[0], Self::FILE, line)?,
            title_type: fields[1].to_string(),
            primary_title: fields[2].to_string(),
            start_year: parse_nullable(fields[3], Self::FILE, line, "startYear")?,
            runtime_minutes: fields[4].to_string(),
            genres: fields[5].to_string(),
        })
    }
}

impl TsvRecord for TitleAlias {
    const FILE: &'static str = TITLE_AKAS_FILE;
    const COLUMNS: &'static [&'static str] = &["titleId", "region"];

    fn from_fields(fields: &[&str], line: u64) -> Result<Self> {
        Ok(TitleAlias {
            title_id: parse_title_id(fields[0], Self::FILE, line)?,
            region: fields[1].to_string(),
        })
    }
}

impl TsvRecord for RatingAggregate {
    const FILE: &'static str = TITLE_RATINGS_FILE;
    const COLUMNS: &'static [&'static str] = &["tconst", "averageRating", "numVotes"];

    fn from_fields(fields: &[&str], line: u64) -> Result<Self> {
        Ok(RatingAggregate {
            title_id: parse_title_id(fields[0], Self::FILE, line)?,
            average_rating: parse_field(fields[1], Self::FILE, line, "averageRating")?,
            num_votes: parse_field(fields[2], Self::FILE, line, "numVotes")?,
        })
    }
}
