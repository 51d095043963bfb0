//! Error types for the data-loader crate.
//!
//! Every variant here is fatal to a curation run: loading never skips a bad
//! row or downgrades a problem to a warning.

use thiserror::Error;

/// Errors that can occur while reading the raw export or the curated artifact
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// A required source file does not exist
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The tabular reader/writer rejected the input
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// The header row of a source file lacks a column we select
    #[error("Missing column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    /// Line in data file couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
