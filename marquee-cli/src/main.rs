//! Marquee CLI - Command-line interface
//!
//! Runs the web server or queries the catalog and trending searches directly.

mod commands;

use clap::Parser;
use marquee_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Movie discovery with trending searches")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    /// Console log level (the log file always captures everything)
    #[arg(long, global = true, value_enum, default_value_t = CliLogLevel::Info)]
    log_level: CliLogLevel,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), None)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    commands::handle_command(cli.command).await
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use marquee_core::RuntimeMode;

    use super::*;
    use crate::commands::Commands;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["marquee", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { host, port, mode } => {
                assert_eq!(host, None);
                assert_eq!(port, None);
                assert_eq!(mode, RuntimeMode::Development);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_search_with_global_log_level() {
        let cli = Cli::try_parse_from([
            "marquee",
            "search",
            "star wars",
            "--mode",
            "production",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(matches!(cli.log_level, CliLogLevel::Debug));
        match cli.command {
            Commands::Search { query, mode } => {
                assert_eq!(query, "star wars");
                assert_eq!(mode, RuntimeMode::Production);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_help_explains_development_counts_are_not_kept() {
        let command = Cli::command();
        for name in ["search", "trending"] {
            let about = command
                .find_subcommand(name)
                .and_then(|sub| sub.get_long_about())
                .map(|about| about.to_string())
                .unwrap_or_default();
            assert!(about.contains("--mode production"), "{name}: {about}");
        }
    }
}
