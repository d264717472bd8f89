use anyhow::{Context, Result};
use clap::Parser;
use contactdash::config::Config;
use contactdash::logger::Logger;
use contactdash::{ui, HttpBackend};
use std::path::PathBuf;
use std::sync::Arc;

/// Terminal dashboard for a JSON contacts endpoint
#[derive(Parser, Debug)]
#[command(name = "contactdash", version, about)]
struct Args {
    /// Read configuration from this file instead of the default locations
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit (defaults to the XDG config path)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,

    /// Contacts endpoint URL, overriding the configuration
    #[arg(short, long, value_name = "URL")]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = args.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    config.apply_env_overrides();
    if let Some(endpoint) = args.endpoint {
        config.backend.endpoint = endpoint;
    }
    config.validate().context("Invalid configuration")?;

    let logger = Logger::new();
    if let Some(path) = logger.install(&config.logging)? {
        log::info!("Logging to {}", path.display());
    }

    let backend = HttpBackend::from_config(&config.backend).context("Failed to create HTTP client")?;
    log::info!("Starting contactdash against {}", backend.endpoint());

    ui::run_app(Arc::new(backend), &config, logger).await
}
