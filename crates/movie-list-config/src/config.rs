use serde::{Deserialize, Serialize};
use std::path::Path;

/// The demo key the original app shipped with. Works for casual use; heavy
/// users should request their own at https://www.omdbapi.com/apikey.aspx.
pub const DEFAULT_OMDB_API_KEY: &str = "b84eb931";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub omdb: OmdbConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OmdbConfig {
    #[serde(default = "default_api_key")]
    pub api_key: String,
}

fn default_api_key() -> String {
    DEFAULT_OMDB_API_KEY.to_string()
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            omdb: OmdbConfig::default(),
        }
    }
}

impl Config {
    /// Load from a TOML file, falling back to defaults when it is absent.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.omdb.api_key.is_empty() {
            return Err(anyhow::anyhow!("omdb.api_key cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.omdb.api_key, DEFAULT_OMDB_API_KEY);
        config.validate().unwrap();
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.omdb.api_key = "my-own-key".to_string();
        config.save_to_file(&path).unwrap();

        let reloaded = Config::load_from_file(&path).unwrap();
        assert_eq!(reloaded.omdb.api_key, "my-own-key");
    }

    #[test]
    fn test_missing_omdb_section_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.omdb.api_key, DEFAULT_OMDB_API_KEY);
    }

    #[test]
    fn test_empty_api_key_fails_validation() {
        let mut config = Config::default();
        config.omdb.api_key = String::new();
        assert!(config.validate().is_err());
    }
}
