use color_eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use movie_list_config::{Config, PathManager};
use movie_list_lookup::{MovieLookup, OmdbClient};
use movie_list_models::LookupOutcome;
use std::time::Duration;

use crate::card;
use crate::output::{Output, OutputFormat};

pub async fn run_find(title: &str, output: &Output) -> Result<()> {
    // Same guard as the interactive form: empty queries are never submitted
    if title.is_empty() {
        output.error("Title must not be empty");
        return Ok(());
    }

    let path_manager = PathManager::default();
    let config = Config::load_from_file(&path_manager.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let client = OmdbClient::new(config.omdb.api_key.clone());
    let outcome = lookup_with_spinner(&client, title, output).await;

    match outcome {
        LookupOutcome::Found(movie) => {
            if output.format() == OutputFormat::Human {
                if !output.is_quiet() {
                    println!("{}", card::movie_card(&movie));
                }
            } else {
                output.json(&serde_json::to_value(&movie)?);
            }
            Ok(())
        }
        LookupOutcome::NotFound(message) => {
            // Every failure cause degrades to the same not-found message
            output.error(&message);
            Ok(())
        }
    }
}

/// Run one lookup with a spinner over the in-flight window.
pub async fn lookup_with_spinner(
    client: &dyn MovieLookup,
    title: &str,
    output: &Output,
) -> LookupOutcome {
    let show_spinner = output.format() == OutputFormat::Human && !output.is_quiet();

    let spinner = if show_spinner {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(format!("Searching for \"{}\"...", title));
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    } else {
        None
    };

    let outcome = client.lookup(title).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    outcome
}
