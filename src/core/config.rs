use anyhow::{bail, Result};
use std::env;

/// Runtime configuration, read from the environment once at startup.
///
/// Built explicitly in `main` and passed to the components that need it;
/// nothing reads the environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token.
    /// Read from BOT_TOKEN (TELOXIDE_TOKEN accepted as a fallback).
    /// The process refuses to start without it.
    pub bot_token: String,

    /// Public URL of the web entry point, as opened by the Mini App button.
    /// Read from WEBAPP_URL. Example: https://example.com/webapp
    pub webapp_url: String,

    /// HTTP listen port. Read from PORT, default 5000.
    pub port: u16,

    /// SQLite database file path. Read from DATABASE_PATH,
    /// default database.sqlite
    pub database_path: String,

    /// Log file path. Read from LOG_FILE_PATH, default app.log
    pub log_file_path: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if BOT_TOKEN is not set or PORT is not a valid port
    /// number.
    pub fn from_env() -> Result<Self> {
        let bot_token = match env::var("BOT_TOKEN").or_else(|_| env::var("TELOXIDE_TOKEN")) {
            Ok(token) if !token.is_empty() => token,
            _ => bail!("BOT_TOKEN environment variable is not set"),
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| anyhow::anyhow!("Invalid PORT value {:?}: {}", raw, e))?,
            Err(_) => 5000,
        };

        let webapp_url = env::var("WEBAPP_URL").unwrap_or_else(|_| {
            log::warn!("WEBAPP_URL is not set, falling back to http://localhost:{}/webapp", port);
            format!("http://localhost:{}/webapp", port)
        });

        let database_path = env::var("DATABASE_PATH").unwrap_or_else(|_| "database.sqlite".to_string());
        let log_file_path = env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string());

        Ok(Config {
            bot_token,
            webapp_url,
            port,
            database_path,
            log_file_path,
        })
    }

    /// Base URL the Telegram webhook is registered under: WEBAPP_URL with a
    /// trailing `/webapp` path stripped.
    pub fn public_base_url(&self) -> &str {
        self.webapp_url.strip_suffix("/webapp").unwrap_or(&self.webapp_url)
    }

    /// Full webhook URL: `{base}/{bot_token}`.
    pub fn webhook_url(&self) -> String {
        format!("{}/{}", self.public_base_url(), self.bot_token)
    }
}
