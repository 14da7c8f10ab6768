//! RecordHub Server: in-memory coffee, employee and flight records over HTTP.
//!
//! Main entry point that loads configuration, sets up logging and starts the
//! listeners.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use recordhub_core::config::AppConfig;
use recordhub_core::error::AppError;

/// Command-line options for the server binary.
#[derive(Debug, Parser)]
#[command(name = "recordhub-server", version, about = "RecordHub record server")]
struct Cli {
    /// Environment name; selects `config/{env}.toml`.
    #[arg(long, env = "RECORDHUB_ENV", default_value = "development")]
    env: String,

    /// Pre-populate every collection with sample records.
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %cli.env, seed = cli.seed, "Configuration loaded");

    if let Err(e) = recordhub_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration(cli: &Cli) -> Result<AppConfig, AppError> {
    let config = AppConfig::load(&cli.env)?;

    Ok(if cli.seed {
        config.with_seed_fixtures()
    } else {
        config
    })
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
