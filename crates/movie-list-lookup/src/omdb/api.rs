use movie_list_models::Movie;
use reqwest::Client;
use serde::Deserialize;

use crate::error::LookupError;

// OMDb API base URL
const API_BASE: &str = "https://www.omdbapi.com/";

/// Raw OMDb payload. Success and failure share one shape, distinguished
/// only by the presence of the `Error` field.
#[derive(Debug, Deserialize)]
pub struct OmdbPayload {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Response")]
    #[allow(dead_code)]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Fetch the raw payload for a title search.
///
/// One request per call, query escaped verbatim.
pub async fn find_by_title(
    client: &Client,
    api_key: &str,
    query: &str,
) -> Result<OmdbPayload, LookupError> {
    let url = format!(
        "{}?apikey={}&t={}",
        API_BASE,
        api_key,
        urlencoding::encode(query)
    );

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(LookupError::Provider(format!(
            "{} - {}",
            status, error_text
        )));
    }

    let payload: OmdbPayload = response.json().await?;
    Ok(payload)
}

/// Map a raw payload into the normalized movie shape.
///
/// A payload carrying `Error` is a provider miss; a payload without `Error`
/// but also without a usable `Title`/`imdbID` is malformed. Both fail here
/// and collapse at the client boundary.
pub fn movie_from_payload(payload: OmdbPayload) -> Result<Movie, LookupError> {
    if let Some(message) = payload.error {
        return Err(LookupError::Provider(message));
    }

    let title = payload
        .title
        .filter(|t| !t.is_empty())
        .ok_or(LookupError::Malformed("Title"))?;
    let imdb_id = payload
        .imdb_id
        .filter(|id| !id.is_empty())
        .ok_or(LookupError::Malformed("imdbID"))?;

    Ok(Movie {
        title,
        imdb_url: Movie::imdb_url_for(&imdb_id),
        description: payload.plot.unwrap_or_default(),
        img_url: payload.poster.unwrap_or_default(),
        imdb_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> OmdbPayload {
        serde_json::from_str(json).expect("payload should deserialize")
    }

    #[test]
    fn test_movie_from_success_payload() {
        let payload = parse(
            r#"{
                "Title": "The Matrix",
                "Year": "1999",
                "imdbID": "tt0133093",
                "Plot": "A computer hacker learns about the true nature of reality.",
                "Poster": "https://m.media-amazon.com/images/matrix.jpg",
                "Response": "True"
            }"#,
        );

        let movie = movie_from_payload(payload).unwrap();
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.imdb_id, "tt0133093");
        assert_eq!(movie.imdb_url, "https://www.imdb.com/title/tt0133093");
        assert_eq!(movie.img_url, "https://m.media-amazon.com/images/matrix.jpg");
        assert!(!movie.description.is_empty());
    }

    #[test]
    fn test_movie_from_error_payload() {
        let payload = parse(r#"{"Response": "False", "Error": "Movie not found!"}"#);

        match movie_from_payload(payload) {
            Err(LookupError::Provider(message)) => assert_eq!(message, "Movie not found!"),
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[test]
    fn test_movie_from_payload_missing_imdb_id() {
        // No Error field, but no usable ID either - malformed
        let payload = parse(r#"{"Title": "The Matrix", "Response": "True"}"#);

        assert!(matches!(
            movie_from_payload(payload),
            Err(LookupError::Malformed("imdbID"))
        ));
    }

    #[test]
    fn test_movie_from_payload_missing_plot_and_poster() {
        let payload = parse(r#"{"Title": "Up", "imdbID": "tt1049413", "Response": "True"}"#);

        let movie = movie_from_payload(payload).unwrap();
        assert_eq!(movie.description, "");
        assert_eq!(movie.img_url, "");
        assert_eq!(movie.imdb_url, "https://www.imdb.com/title/tt1049413");
    }
}
