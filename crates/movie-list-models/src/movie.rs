use serde::{Deserialize, Serialize};

/// A movie normalized from the provider's raw record.
///
/// `imdb_id` is non-empty whenever the record came out of a successful
/// lookup; `description` and `img_url` may be empty or placeholder values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
    pub imdb_id: String,
    pub description: String,
    pub img_url: String,
    pub imdb_url: String,
}

impl Movie {
    /// Derive the canonical IMDB page URL for an IMDB title ID.
    pub fn imdb_url_for(imdb_id: &str) -> String {
        format!("https://www.imdb.com/title/{}", imdb_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imdb_url_for() {
        assert_eq!(
            Movie::imdb_url_for("tt0133093"),
            "https://www.imdb.com/title/tt0133093"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let movie = Movie {
            title: "The Matrix".to_string(),
            imdb_id: "tt0133093".to_string(),
            description: "A computer hacker learns about the true nature of reality.".to_string(),
            img_url: "https://m.media-amazon.com/images/matrix.jpg".to_string(),
            imdb_url: Movie::imdb_url_for("tt0133093"),
        };

        let json = serde_json::to_string(&movie).unwrap();
        let decoded: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, movie);
    }
}
