//! Main entry point for the Shipi18n CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shipi18n_client::cli::commands::{self, Commands};
use shipi18n_client::{ClientConfig, ConfigUpdate, Shipi18nClient};

/// Shipi18n - translate text and JSON locale files from the command line
#[derive(Parser, Debug)]
#[command(name = "shipi18n", version, about, long_about = None)]
struct Args {
    /// API key (optional, defaults to SHIPI18N_API_KEY env var)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API base URL (optional, defaults to SHIPI18N_API_URL env var)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Settings file (default: ./shipi18n.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("shipi18n_client={}", default_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(command) = args.command else {
        println!("Please specify a command. Use --help for more information.");
        return Ok(());
    };

    let mut client = Shipi18nClient::new(ClientConfig::load(args.config.as_deref())?)?;

    // Override config with CLI args if provided
    let mut update = ConfigUpdate::new();
    if let Some(api_key) = args.api_key {
        update = update.api_key(api_key);
    }
    if let Some(api_url) = args.api_url {
        update = update.api_base_url(api_url);
    }
    client.set_config(update);

    commands::run(command, client).await
}
