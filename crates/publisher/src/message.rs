//! The queue message emitted for each curated movie.

use data_loader::CuratedMovie;
use serde::{Deserialize, Serialize};

/// Body of one queue message.
///
/// Downstream consumers key movies on `imdbId`, so the field names are part
/// of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieMessage {
    #[serde(rename = "imdbId")]
    pub imdb_id: String,
    pub title: String,
    pub year: i32,
}

impl From<&CuratedMovie> for MovieMessage {
    fn from(movie: &CuratedMovie) -> Self {
        Self {
            imdb_id: movie.title_id.clone(),
            title: movie.primary_title.clone(),
            year: movie.start_year,
        }
    }
}

impl MovieMessage {
    /// Serialize to the JSON message body
    pub fn to_body(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_shape() {
        let movie = CuratedMovie {
            title_id: "t1".to_string(),
            primary_title: "Alpha".to_string(),
            start_year: 1995,
            runtime_minutes: "120".to_string(),
            genres: "Action Drama".to_string(),
            average_rating: 7.2,
        };

        let body = MovieMessage::from(&movie).to_body().unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value, json!({"imdbId": "t1", "title": "Alpha", "year": 1995}));
    }

    #[test]
    fn test_title_is_escaped() {
        let message = MovieMessage {
            imdb_id: "t2".to_string(),
            title: "Say \"Hi\"".to_string(),
            year: 2001,
        };
        let body = message.to_body().unwrap();
        let parsed: MovieMessage = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, message);
    }
}
