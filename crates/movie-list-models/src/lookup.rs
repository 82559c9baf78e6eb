use crate::movie::Movie;

/// Outcome of a single title lookup against the movie database.
///
/// Provider misses, transport failures, and malformed payloads all surface
/// as `NotFound`; callers never see a distinguishable error type.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(Movie),
    NotFound(String),
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }

    /// Consume the outcome, yielding the movie when one was found.
    pub fn into_movie(self) -> Option<Movie> {
        match self {
            LookupOutcome::Found(movie) => Some(movie),
            LookupOutcome::NotFound(_) => None,
        }
    }
}
