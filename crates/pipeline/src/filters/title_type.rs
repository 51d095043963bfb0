//! Filter on the kind of title.
//!
//! The export mixes movies with shorts, episodes, video games and so on;
//! only one kind is curated.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::TitleAttributes;

/// Keeps titles whose `title_type` matches exactly.
pub struct TitleTypeFilter {
    title_type: String,
}

impl TitleTypeFilter {
    pub fn new(title_type: impl Into<String>) -> Self {
        Self {
            title_type: title_type.into(),
        }
    }
}

impl Filter<TitleAttributes> for TitleTypeFilter {
    fn name(&self) -> &str {
        "TitleTypeFilter"
    }

    fn apply(&self, titles: Vec<TitleAttributes>) -> Result<Vec<TitleAttributes>> {
        let filtered: Vec<TitleAttributes> = titles
            .into_iter()
            .filter(|title| title.title_type == self.title_type)
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(id: &str, title_type: &str) -> TitleAttributes {
        TitleAttributes {
            title_id: id.to_string(),
            title_type: title_type.to_string(),
            primary_title: "Some Title".to_string(),
            start_year: Some(2000),
            runtime_minutes: "\\N".to_string(),
            genres: "\\N".to_string(),
        }
    }

    #[test]
    fn test_title_type_filter() {
        let titles = vec![
            title("t1", "movie"),
            title("t2", "tvSeries"),
            title("t3", "short"),
            title("t4", "movie"),
            title("t5", "Movie"),
        ];

        let filter = TitleTypeFilter::new("movie");
        let filtered = filter.apply(titles).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title_id, "t1");
        assert_eq!(filtered[1].title_id, "t4");
    }
}
