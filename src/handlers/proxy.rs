//! Chat proxy handler
//!
//! Forwards browser chat requests to the Gemini API with the server-held API key

use crate::handlers::AppState;
use crate::middleware::logging::content_length;
use crate::utils::error::{AppError, AppResult};
use crate::utils::logging::create_payload_log_summary;
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Handle chat requests
///
/// POST /api/chat
///
/// The body is treated as an opaque JSON document: it is parsed only to reject
/// malformed input, then forwarded unchanged. The upstream answer is relayed byte for byte.
pub async fn handle_chat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Body,
) -> AppResult<Response> {
    let api_key = state.gemini_client.api_key()?;

    let bytes = read_body(&headers, body, state.settings.request.max_request_size).await?;

    let payload: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
        warn!("Rejecting chat request with invalid JSON: {}", e);
        AppError::InvalidJson
    })?;

    if let Ok(summary) = serde_json::to_string_pretty(&create_payload_log_summary(&payload)) {
        debug!("📥 Chat request:\n{}", summary);
    }

    let reply = state.gemini_client.generate_content(api_key, &payload).await?;

    debug!("📤 Relaying {} bytes from upstream", reply.body.len());
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::OK);
    Ok((status, [(header::CONTENT_TYPE, "application/json")], reply.body).into_response())
}

/// Read the whole request body, bounded by `limit`
///
/// A missing body reads as empty and is later rejected as invalid JSON.
async fn read_body(headers: &HeaderMap, body: Body, limit: usize) -> AppResult<Bytes> {
    if let Some(declared) = content_length(headers) {
        if declared > limit as u64 {
            return Err(AppError::PayloadTooLarge(limit));
        }
    }

    axum::body::to_bytes(body, limit).await.map_err(|e| {
        warn!("Failed to read request body: {}", e);
        AppError::InvalidJson
    })
}
