//! JSON API handlers for the Mini App and the webhook handler

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use teloxide::types::Update;

use crate::account::{self, CreditOutcome, PurchaseOutcome, UserData};
use crate::core::AppError;
use crate::telegram::relay;
use crate::web::page;
use crate::web::server::AppState;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// API-level errors mapped to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        // Backing-store trouble is fatal for the current request only.
        ApiError::Internal(err.to_string())
    }
}

// ============================================================================
// REQUEST BODIES
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct SetStyleRequest {
    pub user_id: i64,
    pub style: String,
}

#[derive(Debug, Deserialize)]
pub struct SetLanguageRequest {
    pub user_id: i64,
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct BuyItemRequest {
    pub user_id: i64,
    pub item: String,
}

#[derive(Debug, Deserialize)]
pub struct BuyDiamondsRequest {
    pub user_id: i64,
    pub amount: i64,
}

// ============================================================================
// HANDLERS
// ============================================================================

/// GET /webapp — the Mini App entry page.
pub async fn webapp_page() -> Html<String> {
    Html(page::render_webapp_page())
}

/// GET /health — simple health check.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// GET /get_user_data?user_id= — fetch user state, creating the row with
/// defaults on first access.
pub async fn get_user_data(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<UserData>, ApiError> {
    let data = account::get_user_data(&state.db_pool, query.user_id)?;
    Ok(Json(data))
}

/// POST /set_style — overwrite the user's cosmetic style.
pub async fn set_style(
    State(state): State<AppState>,
    Json(req): Json<SetStyleRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    account::set_style(&state.db_pool, req.user_id, &req.style)?;
    Ok(Json(serde_json::json!({"success": true})))
}

/// POST /set_language — overwrite the user's language.
pub async fn set_language(
    State(state): State<AppState>,
    Json(req): Json<SetLanguageRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    account::set_language(&state.db_pool, req.user_id, &req.language)?;
    Ok(Json(serde_json::json!({"success": true})))
}

/// POST /buy_item — attempt an item purchase against the catalog price.
pub async fn buy_item(
    State(state): State<AppState>,
    Json(req): Json<BuyItemRequest>,
) -> Result<Json<PurchaseOutcome>, ApiError> {
    let outcome = account::purchase_item(&state.db_pool, &state.catalog, req.user_id, &req.item)?;
    Ok(Json(outcome))
}

/// POST /buy_diamonds — credit diamonds to the balance.
pub async fn buy_diamonds(
    State(state): State<AppState>,
    Json(req): Json<BuyDiamondsRequest>,
) -> Result<Json<CreditOutcome>, ApiError> {
    let outcome = account::credit_diamonds(&state.db_pool, req.user_id, req.amount)?;
    Ok(Json(outcome))
}

/// POST /{bot_token} — Telegram webhook.
///
/// Always acknowledges with a plain `OK`; a failed outbound send is logged,
/// never surfaced to Telegram (which would otherwise retry the update).
pub async fn telegram_webhook(State(state): State<AppState>, Json(update): Json<Update>) -> &'static str {
    if let Some(chat_id) = relay::chat_start_target(&update) {
        if let Err(e) = state.notifier.send_welcome(chat_id).await {
            log::error!("Failed to send welcome message to chat {}: {}", chat_id, e);
        }
    }
    "OK"
}
