//! Web layer: router, JSON API, entry page

pub mod api;
pub mod page;
pub mod server;

pub use server::{create_router, run_server, AppState};
