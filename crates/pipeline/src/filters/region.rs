//! Filter aliases down to an allow-list of release regions.
//!
//! A title only reaches the curated catalog if at least one of its aliases
//! survives this filter; the join enforces that.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::TitleAlias;
use std::collections::HashSet;

/// Keeps aliases whose region is in the allow-list.
///
/// ## Algorithm
/// Uses a HashSet of region codes for O(1) membership checks. Matching is
/// exact: the export's null sentinel or a lowercase code never matches.
pub struct RegionFilter {
    regions: HashSet<String>,
}

impl RegionFilter {
    /// Create a new RegionFilter.
    ///
    /// # Arguments
    /// * `regions` - Two-letter region codes to keep (e.g. ["US", "GB"])
    pub fn new<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            regions: regions.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter<TitleAlias> for RegionFilter {
    fn name(&self) -> &str {
        "RegionFilter"
    }

    fn apply(&self, aliases: Vec<TitleAlias>) -> Result<Vec<TitleAlias>> {
        let filtered: Vec<TitleAlias> = aliases
            .into_iter()
            .filter(|alias| self.regions.contains(&alias.region))
            .collect();

        Ok(filtered)
    }
}
