//! Filter on release year.
//!
//! Removes titles released before a cutoff year. Titles whose year is the
//! null sentinel never carry a number, so they are removed as well.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::TitleAttributes;

/// Keeps titles with a known start year of at least `min_year`.
///
/// ## Algorithm
/// 1. A title with no start year (`\N` in the export) is dropped
/// 2. Otherwise keep it if start_year >= min_year
pub struct ReleaseYearFilter {
    min_year: i32,
}

impl ReleaseYearFilter {
    /// Create a new ReleaseYearFilter.
    ///
    /// # Arguments
    /// * `min_year` - Earliest release year to keep (inclusive)
    pub fn new(min_year: i32) -> Self {
        Self { min_year }
    }
}

impl Filter<TitleAttributes> for ReleaseYearFilter {
    fn name(&self) -> &str {
        "ReleaseYearFilter"
    }

    fn apply(&self, titles: Vec<TitleAttributes>) -> Result<Vec<TitleAttributes>> {
        let filtered: Vec<TitleAttributes> = titles
            .into_iter()
            .filter(|title| title.start_year.is_some_and(|year| year >= self.min_year))
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(id: &str, start_year: Option<i32>) -> TitleAttributes {
        TitleAttributes {
            title_id: id.to_string(),
            title_type: "movie".to_string(),
            primary_title: format!("Title {}", id),
            start_year,
            runtime_minutes: "90".to_string(),
            genres: "Drama".to_string(),
        }
    }

    #[test]
    fn test_release_year_filter() {
        let titles = vec![
            title("t1", Some(1979)), // too old
            title("t2", Some(1980)), // boundary
            title("t3", Some(2020)),
            title("t4", None), // null sentinel in the export
        ];

        let filter = ReleaseYearFilter::new(1980);
        let filtered = filter.apply(titles).unwrap();

        let ids: Vec<&str> = filtered.iter().map(|t| t.title_id.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t3"]);
    }
}
