use clap::Parser;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::ServeArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("expense_tracker=info,tower_http=info")),
        )
        .init();

    let args = ServeArgs::parse();
    let config = args.apply(expense_tracker::config::config().clone());
    tracing::info!("Starting expense tracker in {:?} mode", config.environment);

    expense_tracker::server::run(&config).await
}
