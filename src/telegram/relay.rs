//! Welcome notification relay
//!
//! Turns an inbound webhook update into at most one outbound welcome
//! message with an inline button that opens the Mini App. The sending side
//! sits behind the `Notifier` trait so the webhook handler can be exercised
//! without a live bot.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, Update, UpdateKind, WebAppInfo};

/// Welcome message text.
pub const WELCOME_TEXT: &str = "Добро пожаловать! Открой приложение!";
/// Label of the button that opens the Mini App.
pub const OPEN_APP_LABEL: &str = "Открыть приложение";

/// Outbound side of the relay.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send the welcome message to the given chat.
    async fn send_welcome(&self, chat_id: ChatId) -> anyhow::Result<()>;
}

/// Production notifier backed by the Telegram Bot API.
pub struct TelegramNotifier {
    bot: Bot,
    webapp_url: url::Url,
}

impl TelegramNotifier {
    /// # Errors
    /// Returns an error if `webapp_url` is not a valid URL.
    pub fn new(bot: Bot, webapp_url: &str) -> anyhow::Result<Self> {
        Ok(TelegramNotifier {
            bot,
            webapp_url: url::Url::parse(webapp_url)?,
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_welcome(&self, chat_id: ChatId) -> anyhow::Result<()> {
        self.bot
            .send_message(chat_id, WELCOME_TEXT)
            .reply_markup(welcome_keyboard(self.webapp_url.clone()))
            .await?;
        Ok(())
    }
}

/// One-button inline keyboard opening the Mini App.
pub fn welcome_keyboard(webapp_url: url::Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::web_app(
        OPEN_APP_LABEL,
        WebAppInfo { url: webapp_url },
    )]])
}

/// Chat to welcome for an inbound update.
///
/// A plain message update is the chat-start interaction; anything else is
/// ignored.
pub fn chat_start_target(update: &Update) -> Option<ChatId> {
    match &update.kind {
        UpdateKind::Message(message) => Some(message.chat.id),
        _ => None,
    }
}
