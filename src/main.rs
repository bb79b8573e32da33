//! Carteira main entry point

use carteira_api::start_server;
use carteira_client::{ClientRef, LedgerClient};
use carteira_config::{Config, ConfigError};
use carteira_core::TransactionStore;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "carteira")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight web interface for a personal finance transactions API", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let rt = Runtime::new()?;

    rt.block_on(async {
        let config = match Config::load(args.config.clone()) {
            Ok(config) => config,
            Err(ConfigError::FileNotFound { path }) => {
                eprintln!("[WARN] Config file not found: {}, using defaults", path);
                Config::default()
            }
            Err(e) => {
                eprintln!("[ERROR] Failed to load configuration: {}", e);
                std::process::exit(1);
            }
        };

        eprintln!(
            "[INFO] Config loaded: backend={}, bind={}:{}",
            config.backend.base_url, config.server.host, config.server.port
        );

        let client: ClientRef = Arc::new(LedgerClient::new(config.backend.base_url.clone()));
        let store = Arc::new(RwLock::new(TransactionStore::new()));

        start_server(config, client, store).await
    });

    Ok(())
}
