mod app;
mod config;
mod effects;
mod input;
mod logging;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracker_core::{Holding, StockInfo};
use tracker_engine::ApiClient;
use tracker_logging::tracker_info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Listing {
    Stocks,
    Holdings,
}

/// Browse stock search results and portfolio holdings from the tracker API.
#[derive(Debug, Parser)]
#[command(name = "tracker", version)]
struct Cli {
    /// RON config file; missing means defaults.
    #[arg(long, default_value = "tracker.ron")]
    config: PathBuf,

    #[arg(long, value_enum, default_value_t = Listing::Stocks)]
    listing: Listing,

    /// Overrides `api_base_url` from the config file.
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = config::load_config(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        config.api_base_url = base_url;
    }
    logging::initialize(config.log);
    tracker_info!(
        "Starting {:?} listing against {}",
        cli.listing,
        config.api_base_url
    );

    let client = ApiClient::new(
        &config.api_base_url,
        config.token_provider(),
        config.fetch_settings(),
    )
    .with_context(|| format!("creating API client for {}", config.api_base_url))?;
    let client = Arc::new(client);

    match cli.listing {
        Listing::Stocks => app::run_listing::<StockInfo>(client, false),
        Listing::Holdings => app::run_listing::<Holding>(client, true),
    }
}
