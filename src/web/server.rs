//! HTTP server for the Mini App and the bot webhook
//!
//! One axum router carries the storefront JSON API, the web entry page,
//! static assets, and the token-derived webhook path.

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::catalog::Catalog;
use crate::storage::DbPool;
use crate::telegram::Notifier;
use crate::web::api;

/// Shared state for all endpoints.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: Arc<DbPool>,
    pub catalog: Arc<Catalog>,
    pub notifier: Arc<dyn Notifier>,
}

/// Build the application router.
///
/// The webhook route is mounted at `/{bot_token}`, so only a caller that
/// knows the token can reach it.
pub fn create_router(state: AppState, bot_token: &str) -> Router {
    // CORS for the Mini App
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/webapp", get(api::webapp_page))
        .nest_service("/static", ServeDir::new("static"))
        .route("/get_user_data", get(api::get_user_data))
        .route("/set_style", post(api::set_style))
        .route("/set_language", post(api::set_language))
        .route("/buy_item", post(api::buy_item))
        .route("/buy_diamonds", post(api::buy_diamonds))
        .route("/health", get(api::health))
        .route(&format!("/{}", bot_token), post(api::telegram_webhook))
        .layer(cors)
        .with_state(state)
}

/// Run the server until shutdown.
pub async fn run_server(port: u16, bot_token: &str, state: AppState) -> anyhow::Result<()> {
    let app = create_router(state, bot_token);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    log::info!("Starting web server on http://{}", addr);
    log::info!("  /webapp         - Mini App entry point");
    log::info!("  /get_user_data  - User state (JSON)");
    log::info!("  /health         - Health check");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
