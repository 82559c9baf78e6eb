use async_trait::async_trait;
use movie_list_models::{LookupOutcome, Movie};
use reqwest::Client;
use tracing::debug;

use crate::error::LookupError;
use crate::omdb::api;
use crate::traits::MovieLookup;
use crate::LOOKUP_FAILED_MESSAGE;

/// OMDb title-search client.
///
/// The API key travels as a plain query parameter; there is no token flow
/// and nothing to refresh.
#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    api_key: String,
}

impl OmdbClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Build with a caller-provided reqwest client (custom timeouts, proxies).
    pub fn with_client(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

/// Collapse every failure cause into the same `NotFound` outcome.
///
/// Provider misses, transport failures, and malformed payloads are not
/// distinguished past this point; the cause only survives in the debug log.
pub(crate) fn collapse(result: Result<Movie, LookupError>) -> LookupOutcome {
    match result {
        Ok(movie) => LookupOutcome::Found(movie),
        Err(err) => {
            debug!("lookup failed: {}", err);
            LookupOutcome::NotFound(LOOKUP_FAILED_MESSAGE.to_string())
        }
    }
}

#[async_trait]
impl MovieLookup for OmdbClient {
    fn provider_name(&self) -> &str {
        "omdb"
    }

    async fn lookup(&self, query: &str) -> LookupOutcome {
        let mapped = match api::find_by_title(&self.client, &self.api_key, query).await {
            Ok(payload) => api::movie_from_payload(payload),
            Err(err) => Err(err),
        };
        collapse(mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_movie(title: &str, imdb_id: &str) -> Movie {
        Movie {
            title: title.to_string(),
            imdb_id: imdb_id.to_string(),
            description: String::new(),
            img_url: String::new(),
            imdb_url: Movie::imdb_url_for(imdb_id),
        }
    }

    #[test]
    fn test_collapse_found() {
        let outcome = collapse(Ok(create_movie("The Matrix", "tt0133093")));
        assert_eq!(
            outcome,
            LookupOutcome::Found(create_movie("The Matrix", "tt0133093"))
        );
    }

    #[test]
    fn test_with_client_builds_omdb_provider() {
        // Caller-supplied transport (custom timeouts, proxies) is accepted as-is
        let transport = Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();

        let client = OmdbClient::with_client(transport, "b84eb931".to_string());
        assert_eq!(client.provider_name(), "omdb");
        assert_eq!(client.api_key, "b84eb931");
    }

    #[test]
    fn test_collapse_is_cause_blind() {
        // Provider miss and malformed payload produce the identical outcome
        let provider_miss = collapse(Err(LookupError::Provider("Movie not found!".to_string())));
        let malformed = collapse(Err(LookupError::Malformed("imdbID")));

        assert_eq!(
            provider_miss,
            LookupOutcome::NotFound(LOOKUP_FAILED_MESSAGE.to_string())
        );
        assert_eq!(provider_miss, malformed);
    }
}
