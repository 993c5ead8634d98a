//! Dreamstore — backend for a Telegram Mini App storefront
//!
//! Persists per-user virtual-currency state (diamonds, energy, cosmetic
//! style, language, purchases) in SQLite and relays the Telegram bot
//! webhook to send users a link into the web app.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging
//! - `storage`: connection pool, user rows, purchase log, migrations
//! - `catalog`: static item price table
//! - `account`: user-state operations (read-or-create, mutate, purchase, credit)
//! - `web`: axum router, JSON API, entry page
//! - `telegram`: bot client, webhook registration, welcome relay

pub mod account;
pub mod catalog;
pub mod core;
pub mod storage;
pub mod telegram;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::{AppError, AppResult, Config};
pub use crate::storage::{create_pool, get_connection, DbConnection, DbPool};
