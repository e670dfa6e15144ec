//! HR Console - Entry Point
//!
//! Role-gated account administration for the HR console, driven from the
//! terminal.

use log::{error, info};
use tokio::io::BufReader;

use hr_console_auth::console::run_console;
use hr_console_auth::error::AppError;
use hr_console_auth::storage::FileStore;
use hr_console_auth::utils::logging::setup_logging;
use hr_console_auth::{AppConfig, AuthService};

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let backend = FileStore::new(config.storage.data_dir_path());
    info!("Account data directory: {}", backend.data_dir().display());
    let mut service = AuthService::open(backend, &config.storage, config.auth.clone())?;

    let reader = BufReader::new(tokio::io::stdin());
    run_console(&mut service, reader, tokio::io::stdout()).await
}

#[tokio::main]
async fn main() {
    setup_logging();

    info!("Launching HR console...");

    if let Err(e) = run().await {
        error!("HR console stopped: {}", e);
        std::process::exit(1);
    }
}
