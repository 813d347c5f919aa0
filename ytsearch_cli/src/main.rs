use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ytsearch_core::SearchClient;

#[derive(Parser)]
#[command(
    name = "ytsearch",
    version,
    about = "Search YouTube from the terminal, no API key required"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for videos, channels, playlists and mixes
    Search {
        /// Search query
        query: String,
    },
    /// Fetch the next page of an earlier search
    Page {
        /// Innertube API key from the first response (`key` field)
        #[arg(long)]
        key: String,
        /// Continuation token from the first response (`nextPageToken` field)
        #[arg(long)]
        token: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ytsearch_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = SearchClient::new()?;

    let response = match &cli.command {
        Commands::Search { query } => client.search(query).await?,
        Commands::Page { key, token } => client.continue_search(key, token).await?,
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
