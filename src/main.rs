use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;

use dreamstore::catalog::Catalog;
use dreamstore::core::{init_logger, Config};
use dreamstore::storage;
use dreamstore::telegram::{create_bot, register_webhook, TelegramNotifier};
use dreamstore::web::{run_server, AppState};

/// Main entry point for the storefront backend
///
/// # Errors
/// Returns an error if initialization fails (missing BOT_TOKEN, logging,
/// database, server bind).
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    let _ = dotenv();

    let config = Config::from_env()?;
    init_logger(&config.log_file_path)?;
    log::info!("Starting dreamstore backend (port {})", config.port);

    let db_pool = Arc::new(storage::create_pool(&config.database_path)?);
    let catalog = Arc::new(Catalog::standard());

    let bot = create_bot(&config)?;
    // A transient Telegram outage should not keep the storefront down;
    // the webhook can be re-registered on the next restart.
    if let Err(e) = register_webhook(&bot, &config).await {
        log::warn!("Failed to register Telegram webhook: {}", e);
    }

    let notifier = Arc::new(TelegramNotifier::new(bot, &config.webapp_url)?);
    let state = AppState {
        db_pool,
        catalog,
        notifier,
    };

    run_server(config.port, &config.bot_token, state).await
}
