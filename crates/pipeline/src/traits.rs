//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a record set.

use anyhow::Result;

/// Core trait for filtering records of type `T`.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets the three loaders run their pipelines on separate threads
/// - Filters take ownership of the Vec<T> and return a filtered Vec
/// - A filter never edits a record; it only decides which ones survive
pub trait Filter<T>: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of records.
    ///
    /// # Arguments
    /// * `records` - The records to filter (takes ownership)
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The surviving records, in their original order
    /// * `Err` - If filtering fails
    fn apply(&self, records: Vec<T>) -> Result<Vec<T>>;
}
