use anyhow::Result;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use microblog_api::api;
use microblog_api::config::Config;
use microblog_api::db::init_database;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,microblog_api=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Initialized configuration");

    // Initialize database
    let db = init_database(&config).await?;
    info!("Connected to database");

    // Serve until a shutdown signal arrives
    api::start_api_server(&config, db).await?;

    info!("Microblog API shutdown complete");
    Ok(())
}
