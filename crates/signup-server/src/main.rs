use anyhow::{Context, Result};
use clap::Parser;
use signup_server::{app, AppState, Config};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Submission sink for partner registrations
#[derive(Parser, Debug)]
#[command(name = "signup-server", version, about)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = signup_server::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to read .env: {}", e);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = Config::load(&args.config)
        .unwrap_or_else(|e| {
            warn!("Failed to load config: {:#}, using defaults", e);
            Config::default()
        })
        .with_env()?;

    let repository = signup_store::open(&config.storage)
        .await
        .context("Failed to open partner storage")?;
    info!("Storage: {}", repository.name());

    let state = AppState::new(repository, config.listing.page_size);

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
