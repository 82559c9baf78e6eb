use clap::{ArgAction, Parser, Subcommand};
use commands::{collect, config, find};

mod card;
mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "watchnext")]
#[command(about = "WatchNext - Find movies and build your watch list")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a single movie by title
    #[command(long_about = "Look up a movie title against the OMDb database and print its card. Any lookup failure (no match, network error, malformed response) reports the same not-found message.")]
    Find {
        /// Movie title to search for
        #[arg(value_name = "TITLE", required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Interactively search for movies and collect them into a list
    #[command(long_about = "Start an interactive session: type a title, preview the match, and confirm to add it to the list. Duplicate titles are rejected. An empty title ends the session and prints the collected list.")]
    Collect,
    /// Configure the OMDb API key
    #[command(long_about = "Manage configuration for WatchNext. Use subcommands to view settings or set the OMDb API key. The bundled demo key works for casual use.")]
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show {
        /// Show full configuration including the API key
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },

    /// Set the OMDb API key
    Omdb {
        /// OMDb API key (if not provided, will prompt)
        #[arg(long)]
        api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Find { title } => find::run_find(&title.join(" "), &output).await,
        Commands::Collect => collect::run_collect(&output).await,
        Commands::Config { cmd } => match cmd {
            Some(ConfigCommands::Show { full }) => config::run_show(full, &output),
            Some(ConfigCommands::Omdb { api_key }) => config::run_set_omdb(api_key, &output),
            None => config::run_show(false, &output),
        },
    }
}
