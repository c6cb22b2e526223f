//! Solarex Account Indexer
//!
//! Routes a batch of Solarex program accounts into in-memory indices and
//! reports what was indexed.

use anyhow::Result;
use clap::Parser;
use solarex_indexer::adapters::solana::load_accounts;
use solarex_indexer::adapters::{InMemoryEntityCache, InMemoryIndices, PdaWhitelistResolver};
use solarex_indexer::domain::NameOverrides;
use solarex_indexer::{AccountRouter, IndexerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "solarex-indexer")]
#[command(about = "Solarex Account Indexer")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "indexer.toml")]
    config: String,

    /// JSON file of keyed accounts as returned by getProgramAccounts
    #[arg(short, long)]
    accounts: Option<PathBuf>,

    /// Index auction managers of every store
    #[arg(long)]
    include_all_stores: bool,

    /// Override log level
    #[arg(long)]
    log_level: Option<String>,

    /// Print the full indices as JSON after routing
    #[arg(long)]
    dump: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_missing = !std::path::Path::new(&cli.config).exists();
    let mut config = if config_missing {
        IndexerConfig::default()
    } else {
        IndexerConfig::from_file(&cli.config)?
    };

    if let Some(log_level) = cli.log_level {
        config.monitoring.log_level = log_level;
    }
    if cli.include_all_stores {
        config.processing.include_all_stores = true;
    }

    init_logging(&config);
    if config_missing {
        warn!("Config file not found, using defaults: {}", cli.config);
    }

    info!("Starting Solarex Account Indexer");
    config.validate()?;
    let settings = config.router_settings()?;
    info!("Program ID: {}", settings.program_id);
    match settings.store {
        Some(store) => info!("Store: {}", store),
        None => warn!("No store configured; store filtering disabled"),
    }

    if cli.dry_run {
        info!("Dry run mode - configuration is valid, exiting");
        return Ok(());
    }

    let names = match &config.processing.name_overrides {
        Some(path) => NameOverrides::from_file(path)?,
        None => NameOverrides::default(),
    };

    let resolver = PdaWhitelistResolver::new(settings.program_id, settings.store);
    let router = AccountRouter::new(
        settings,
        Arc::new(InMemoryEntityCache::new()),
        Arc::new(resolver),
        Arc::new(names),
    );

    let Some(accounts_path) = cli.accounts else {
        warn!("No accounts file given, nothing to index");
        return Ok(());
    };
    let accounts = load_accounts(&accounts_path)?;
    info!("Loaded {} accounts from {:?}", accounts.len(), accounts_path);

    let indices = InMemoryIndices::new();
    let summary = router
        .route_batch(&accounts, &indices, config.processing.include_all_stores)
        .await;

    info!(
        indexed = summary.indexed,
        filtered = summary.filtered,
        failed = summary.failed,
        writes = summary.writes,
        "Routing finished"
    );
    if summary.failed > 0 {
        warn!("{} accounts could not be decoded", summary.failed);
    }

    if cli.dump {
        println!("{}", serde_json::to_string_pretty(&indices.snapshot())?);
    } else {
        println!("{}", serde_json::to_string_pretty(&indices.sizes())?);
    }

    Ok(())
}

fn init_logging(config: &IndexerConfig) {
    let log_level = config
        .monitoring
        .log_level
        .parse()
        .unwrap_or(tracing::Level::INFO);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("solarex_indexer={}", log_level).into());

    if config.monitoring.structured_logging {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
