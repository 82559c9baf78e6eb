use color_eyre::Result;
use movie_list_config::{Config, PathManager};
use movie_list_core::{CollectionStore, InMemoryCollection, WorkflowState};
use movie_list_lookup::{OmdbClient, LOOKUP_FAILED_MESSAGE};
use tracing::debug;

use crate::card;
use crate::commands::find::lookup_with_spinner;
use crate::commands::prompts::{prompt_string, prompt_yes_no};
use crate::output::{Output, OutputFormat};

/// Interactive search-and-collect session.
///
/// One form instance per session: type a title, preview the match, confirm
/// to add. An empty title ends the session and prints the collected list.
pub async fn run_collect(output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config = Config::load_from_file(&path_manager.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let client = OmdbClient::new(config.omdb.api_key.clone());
    let mut store = InMemoryCollection::new();
    let mut state = WorkflowState::new();

    output.println("Type a movie title to search; leave empty to finish.\n");

    loop {
        let input = prompt_string("Movie title", None)?;
        if input.is_empty() {
            break;
        }

        state.edit_query(input);

        state.begin_search();
        let outcome = lookup_with_spinner(&client, &state.query, output).await;
        state.apply_outcome(outcome);

        if state.has_error {
            output.error(LOOKUP_FAILED_MESSAGE);
            continue;
        }

        let Some(preview) = state.preview.clone() else {
            continue;
        };

        if !output.is_quiet() {
            println!("\nPreview\n{}\n", card::movie_card(&preview));
        }

        if prompt_yes_no("Add to the list?", Some(true))? {
            let before = store.get().len();
            let added = state.add_to_collection(&mut store);
            if added {
                output.success(&format!("Added \"{}\" to the list", preview.title));
            } else {
                debug!("collect: duplicate add, list_len={}", before);
                output.warn(&format!("\"{}\" is already on the list", preview.title));
            }
        } else {
            // Declined: drop the preview, same form reset as "add"
            state.preview = None;
            state.query.clear();
        }

        let movies = store.get();
        if !movies.is_empty() && !output.is_quiet() && output.format() == OutputFormat::Human {
            println!("\nYour list\n{}\n", card::collection_table(&movies));
        }
    }

    let movies = store.get();
    match output.format() {
        OutputFormat::Human => {
            if movies.is_empty() {
                output.println("No movies collected.");
            } else {
                output.println(format!("\nCollected {} movie(s):", movies.len()));
                if !output.is_quiet() {
                    println!("{}", card::collection_table(&movies));
                }
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&movies)?);
        }
    }

    Ok(())
}
