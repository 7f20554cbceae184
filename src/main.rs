//! walletledger main entry point

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;
use walletledger_api::start_server;
use walletledger_config::{Config, ConfigError};
use walletledger_core::{CoreError, Ledger};
use walletledger_parser::DefaultLedgerParser;

#[derive(Parser, Debug)]
#[command(name = "walletledger")]
#[command(version = "0.1.0")]
#[command(about = "A wallet ledger dashboard with a sortable transaction table", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Ledger file, overrides data.path/data.main_file
    #[arg(short, long)]
    ledger: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let (config, config_missing) = match Config::load(args.config.clone()) {
        Ok(config) => (config, false),
        Err(ConfigError::FileNotFound { .. }) => (Config::default(), true),
        Err(e) => {
            anyhow::bail!(
                "Failed to load configuration from {}: {}",
                args.config.display(),
                e.to_details()
            );
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.level.as_str()))
        .init();

    if config_missing {
        log::warn!(
            "Config file {} not found, using defaults",
            args.config.display()
        );
    }
    log::info!(
        "Config loaded: data path={}, main_file={}",
        config.data.path.display(),
        config.data.main_file
    );

    let rt = Runtime::new().context("Failed to start the tokio runtime")?;

    rt.block_on(async {
        let parser = Arc::new(DefaultLedgerParser);
        let ledger = Arc::new(RwLock::new(Ledger::new(config.clone(), parser)));

        let ledger_path = args.ledger.clone().unwrap_or_else(|| config.ledger_path());
        log::info!("Looking for ledger file: {}", ledger_path.display());

        {
            let mut guard = ledger.write().await;
            match guard.load(ledger_path.clone()).await {
                Ok(()) => log::info!("Ledger loaded successfully"),
                Err(CoreError::FileNotFound { .. }) => {
                    log::warn!(
                        "Ledger file not found: {}, serving the built-in sample",
                        ledger_path.display()
                    );
                    guard.load_sample()?;
                }
                Err(e) => {
                    anyhow::bail!(
                        "Failed to load ledger {}: {}",
                        ledger_path.display(),
                        e.to_details()
                    );
                }
            }
        }

        start_server(config, ledger)
            .await
            .context("Server error")?;
        Ok::<(), anyhow::Error>(())
    })
}
