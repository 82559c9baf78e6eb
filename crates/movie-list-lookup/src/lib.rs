pub mod error;
pub mod omdb;
pub mod traits;

pub use error::LookupError;
pub use omdb::OmdbClient;
pub use traits::MovieLookup;

/// The one user-visible message every lookup failure collapses into.
pub const LOOKUP_FAILED_MESSAGE: &str = "Can't find a movie with such a title";
