//! Telegram integration: bot client, webhook registration, welcome relay

pub mod bot;
pub mod relay;

pub use bot::{create_bot, register_webhook};
pub use relay::{Notifier, TelegramNotifier};
