use anyhow::{Context, Result};
use clap::Parser;
use resume_scraper::core::config_manager::DEFAULT_CONFIG_PATH;
use resume_scraper::{start_web_server, ConfigManager};
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "resume-scraper")]
#[command(about = "Turn a public profile page into a JSON Resume document")]
struct Cli {
    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    address: Option<String>,

    /// Configuration file (defaults to ./config.yaml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(false)
                    .with_span_list(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(file_layer)
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resume_scraper=info,rocket::server=off")),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = ConfigManager::load(cli.config.as_deref())?;
    let mut config = loaded.config;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(address) = cli.address {
        config.address = address;
    }

    init_tracing(config.log_file.as_ref())?;

    info!("Loading configuration for environment: {}", loaded.environment);
    match &loaded.source {
        Some(path) => info!("Configuration file: {}", path.display()),
        None => info!("No {} found, using defaults", DEFAULT_CONFIG_PATH),
    }
    info!("Index template: {}", config.index_template.display());
    match &config.catalog_url {
        Some(url) => info!("Theme catalog: {}", url),
        None => info!("Theme catalog disabled"),
    }

    start_web_server(config).await
}
