pub mod commands;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "petstore-api")]
#[command(about = "Pet Store API - JWT-authenticated CRUD over pets, categories and tags")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Override the listening port")]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve,

    #[command(about = "Wipe all data and load the demo catalogue")]
    Seed,
}

/// Dispatch a parsed command line. Any error propagates to `main`, which exits
/// non-zero.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    tracing::info!("Starting Pet Store API in {:?} mode", config.environment);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => commands::serve::handle(config).await,
        Commands::Seed => commands::seed::handle(config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["petstore-api"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.port.is_none());
    }

    #[test]
    fn parses_seed_and_port() {
        let cli = Cli::try_parse_from(["petstore-api", "seed"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Seed));

        let cli = Cli::try_parse_from(["petstore-api", "serve", "--port", "8081"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Serve));
        assert_eq!(cli.port, Some(8081));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["petstore-api", "migrate"]).is_err());
    }
}
