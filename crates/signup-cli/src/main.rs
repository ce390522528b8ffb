mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "signup")]
#[command(version, about = "Register partners with the sign-up service", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the registration form and submit it
    Register(commands::register::RegisterArgs),

    /// Show stored registrations
    List {
        /// Only companies containing this text
        #[arg(long)]
        company: Option<String>,

        /// Sink URL (overrides signup.toml and SIGNUP_ENDPOINT)
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Complete a partial postcode
    Suggest {
        /// Beginning of a postcode
        partial: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Some(warning) = config::dotenv_warning(dotenvy::dotenv()) {
        eprintln!("{}", warning);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::CliConfig::load(&cli.config)?.with_env();

    match cli.command {
        Commands::Register(args) => {
            commands::register::execute(config, args).await?;
        }
        Commands::List { company, endpoint } => {
            commands::list::execute(config.with_endpoint(endpoint), company.as_deref()).await?;
        }
        Commands::Suggest { partial } => {
            commands::suggest::execute(&partial);
        }
    }

    Ok(())
}
