pub mod config;
pub mod paths;

pub use config::{Config, OmdbConfig, DEFAULT_OMDB_API_KEY};
pub use paths::{base_path_override, PathManager};
