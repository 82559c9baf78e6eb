use anyhow::Result;
use dirs;
use std::path::{Path, PathBuf};

/// Get the base path override from the environment, if set.
///
/// Used in containers where the platform config dir is not writable.
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("WATCHNEXT_BASE_PATH").ok().map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("watchnext");

        Ok(Self { config_dir })
    }

    pub fn from_base_path(base: PathBuf) -> Self {
        Self { config_dir: base }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::from_base_path(base);
        }

        // Platform-specific path (e.g. ~/.config/watchnext on Linux)
        Self::new().unwrap_or_else(|_| Self::from_base_path(PathBuf::from(".")))
    }
}
