//! Pastebin command line client - Main Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use config::{ConfigLoader, ConfigRecords};
use std::env;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use types::ENVIRONMENT_VAR;

mod app;
mod cli;

use app::Application;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let dotenv_result = dotenv::dotenv();

    // Initialize logging
    init_logging()?;

    match dotenv_result {
        Ok(path) => debug!("Loaded environment variables from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Could not load .env file: {}", e),
    }

    let cli = Cli::parse();
    debug!("Environment indicator read from {}", ENVIRONMENT_VAR);

    // Resolve configuration once; everything below receives it explicitly
    let records = match &cli.config_dir {
        Some(dir) => ConfigLoader::load_dir(dir)
            .with_context(|| format!("Failed to load configuration from {}", dir.display()))?,
        None => ConfigRecords::builtin(),
    };
    let config = records.resolve_from_env();

    info!(environment = %config.environment(), "Configuration resolved");

    let app = Application::new(config, cli.base_url).context("Failed to create application")?;
    debug!(keys = app.config().as_map().len(), "Application ready");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app.execute(cli.command, &mut out).await
}

/// Initialize logging based on environment variables
fn init_logging() -> Result<()> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    // stdout carries command output, logs go to stderr
    match log_format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize JSON logging")?;
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize pretty logging")?;
        }
    }

    debug!("Log level: {}, format: {}", log_level, log_format);

    Ok(())
}
