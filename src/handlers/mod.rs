//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod proxy;
pub mod static_files;

use crate::config::Settings;
use crate::middleware::{cors_middleware, request_logging_middleware};
use crate::services::GeminiClient;
use anyhow::Result;
use axum::{
    http::StatusCode,
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Path of the proxied chat endpoint
pub const CHAT_PATH: &str = "/api/chat";

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub gemini_client: GeminiClient,
    pub static_files: ServeDir,
}

/// Create application router
pub fn create_router(settings: Settings) -> Result<Router> {
    let gemini_client = GeminiClient::new(settings.gemini.clone())?;
    let static_files = ServeDir::new(&settings.server.static_dir);

    let app_state = Arc::new(AppState {
        settings,
        gemini_client,
        static_files,
    });

    // CORS sits outermost so every response, including pre-flight, carries its headers
    let middleware_stack = ServiceBuilder::new()
        .layer(from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(request_logging_middleware));

    let router = Router::new()
        .route(CHAT_PATH, post(proxy::handle_chat).fallback(not_found))
        .fallback(static_files::serve_static)
        .with_state(app_state)
        .layer(middleware_stack);

    Ok(router)
}

/// Empty 404 for any method/path combination without a handler
pub async fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}
