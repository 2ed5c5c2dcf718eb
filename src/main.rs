use clap::Parser;
use tracing_subscriber::EnvFilter;

use petstore_api::cli::{self, Cli};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("petstore_api=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli::run(cli).await {
        tracing::error!("Fatal: {:#}", e);
        std::process::exit(1);
    }
}
