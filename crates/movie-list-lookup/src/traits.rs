use async_trait::async_trait;
use movie_list_models::LookupOutcome;

/// A provider that can look up a single movie by free-text title.
///
/// The workflow depends only on this trait, so it can be driven by a stub
/// provider in tests without a network.
#[async_trait]
pub trait MovieLookup: Send + Sync {
    // Provider metadata
    fn provider_name(&self) -> &str;

    /// Issue exactly one outbound request for `query`.
    ///
    /// No retries, no caching, no timeout beyond the transport default.
    /// Callers are responsible for withholding empty queries; the query is
    /// sent verbatim (URL-escaped) otherwise.
    async fn lookup(&self, query: &str) -> LookupOutcome;
}
