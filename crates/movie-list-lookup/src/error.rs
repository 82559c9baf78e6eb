use thiserror::Error;

/// Internal failure taxonomy for a lookup.
///
/// None of these variants escape the client boundary: every one collapses
/// into `LookupOutcome::NotFound` with the same generic message. They exist
/// so the debug log can say what actually went wrong.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("malformed payload: missing {0}")]
    Malformed(&'static str),
}
