use color_eyre::Result;
use movie_list_config::{Config, PathManager};
use serde_json::json;

use crate::commands::prompts::prompt_string;
use crate::output::{Output, OutputFormat};

fn mask_key(key: &str) -> String {
    // Count chars, not bytes: the key is user-supplied and need not be ASCII
    let total = key.chars().count();
    if total <= 4 {
        return "*".repeat(total);
    }

    let visible: String = key.chars().skip(total - 4).collect();
    format!("{}{}", "*".repeat(total - 4), visible)
}

pub fn run_show(full: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config = Config::load_from_file(&path_manager.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;

    let api_key = if full {
        config.omdb.api_key.clone()
    } else {
        mask_key(&config.omdb.api_key)
    };

    match output.format() {
        OutputFormat::Human => {
            output.println(format!(
                "Config file: {}",
                path_manager.config_file().display()
            ));
            output.println(format!("OMDb API key: {}", api_key));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": path_manager.config_file().display().to_string(),
                "omdb": { "api_key": api_key },
            }));
        }
    }

    Ok(())
}

pub fn run_set_omdb(api_key: Option<String>, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    path_manager
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let mut config = Config::load_from_file(&path_manager.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;

    let key = match api_key {
        Some(key) => key,
        None => prompt_string("OMDb API key", Some(&config.omdb.api_key))?,
    };

    if key.is_empty() {
        output.error("API key cannot be empty");
        return Ok(());
    }

    config.omdb.api_key = key;
    config
        .save_to_file(&path_manager.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save config: {}", e))?;

    output.success("OMDb API key saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key_keeps_last_four() {
        assert_eq!(mask_key("b84eb931"), "****b931");
    }

    #[test]
    fn test_mask_key_short_values() {
        assert_eq!(mask_key("abc"), "***");
        assert_eq!(mask_key(""), "");
    }

    #[test]
    fn test_mask_key_multibyte_values() {
        // Must not panic or split a multibyte char at the mask boundary
        assert_eq!(mask_key("clé-secrète"), "*******rète");
        assert_eq!(mask_key("ключ"), "****");
    }
}
