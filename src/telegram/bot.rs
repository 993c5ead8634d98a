//! Bot client creation and webhook registration

use reqwest::ClientBuilder;
use std::time::Duration;
use teloxide::prelude::*;

use crate::core::Config;

/// HTTP timeout for Telegram API requests.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Creates a Bot instance with the configured token.
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Failed to build the HTTP client
pub fn create_bot(config: &Config) -> anyhow::Result<Bot> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(Bot::with_client(config.bot_token.clone(), client))
}

/// Registers the bot webhook at `{base}/{bot_token}`, where `base` is the
/// public web-app URL with its `/webapp` path stripped.
///
/// # Errors
/// Returns an error if the webhook URL does not parse or Telegram rejects
/// the registration.
pub async fn register_webhook(bot: &Bot, config: &Config) -> anyhow::Result<()> {
    let url = url::Url::parse(&config.webhook_url())?;

    // Delete existing webhook to ensure clean state
    let _ = bot.delete_webhook().await;

    bot.set_webhook(url.clone()).await?;
    log::info!("Telegram webhook registered at {}", url);
    Ok(())
}
