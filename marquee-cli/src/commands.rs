//! CLI command implementations

use anyhow::Context;
use clap::Subcommand;
use marquee_core::{MarqueeConfig, RuntimeMode};
use marquee_search::DiscoveryService;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to, overriding MARQUEE_HOST
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to, overriding MARQUEE_PORT
        #[arg(short, long)]
        port: Option<u16>,
        /// Runtime mode (production or development)
        #[arg(long, default_value = "development")]
        mode: RuntimeMode,
    },
    /// Search the catalog and record the search
    ///
    /// In development mode the count lives in memory and is gone when the
    /// command exits; use `--mode production` to record it in Appwrite.
    Search {
        /// Search text; empty lists popular movies
        query: String,
        /// Runtime mode (production or development); development records in memory only
        #[arg(long, default_value = "development")]
        mode: RuntimeMode,
    },
    /// Show the most searched terms
    ///
    /// Development mode starts from an empty in-memory store, so it never
    /// shows searches from earlier commands; use `--mode production` to read
    /// the Appwrite counts.
    Trending {
        /// Runtime mode (production or development); development is always empty
        #[arg(long, default_value = "development")]
        mode: RuntimeMode,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns the error of the command that failed
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = MarqueeConfig::from_env();

    match command {
        Commands::Serve { host, port, mode } => serve(config, host, port, mode).await,
        Commands::Search { query, mode } => search(&config, &query, mode).await,
        Commands::Trending { mode } => trending(&config, mode).await,
    }
}

async fn serve(
    mut config: MarqueeConfig,
    host: Option<String>,
    port: Option<u16>,
    mode: RuntimeMode,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    println!(
        "Marquee running on http://{}:{} ({mode} mode)",
        config.server.host, config.server.port
    );
    marquee_web::run_server(config, mode)
        .await
        .context("Web server stopped")
}

async fn search(config: &MarqueeConfig, query: &str, mode: RuntimeMode) -> anyhow::Result<()> {
    let discovery = DiscoveryService::from_runtime_mode(config, mode);

    let movies = discovery
        .fetch_movies(query)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if movies.is_empty() {
        println!("No movies found");
        return Ok(());
    }

    for movie in &movies {
        println!(
            "{:>8}  {:<40} {:>4}  {:>4.1}  {}",
            movie.id,
            movie.title,
            movie.release_year().unwrap_or("N/A"),
            movie.vote_average,
            movie.original_language
        );
    }

    if let Some(top) = movies.first() {
        discovery.record_search(query, top).await;
    }
    Ok(())
}

async fn trending(config: &MarqueeConfig, mode: RuntimeMode) -> anyhow::Result<()> {
    let discovery = DiscoveryService::from_runtime_mode(config, mode);

    let records = discovery
        .get_trending()
        .await
        .context("Failed to load trending searches")?;

    if records.is_empty() {
        println!("No trending searches yet");
        if mode.is_development() {
            println!("Development mode keeps counts in memory per run; use --mode production");
        }
        return Ok(());
    }

    for (rank, record) in records.iter().enumerate() {
        println!("{:>2}. {} ({} searches)", rank + 1, record.search_term, record.count);
    }
    Ok(())
}
