//! Static file handler
//!
//! Serves GET/HEAD requests from the configured root directory

use crate::handlers::{not_found, AppState};
use axum::{
    extract::{Request, State},
    http::Method,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tower::ServiceExt;
use tracing::debug;

/// Fallback for every path without a dedicated route
///
/// GET and HEAD go to `ServeDir`, which also refuses paths escaping the root.
/// Every other method gets an empty 404.
pub async fn serve_static(State(state): State<Arc<AppState>>, request: Request) -> Response {
    if request.method() != Method::GET && request.method() != Method::HEAD {
        debug!("No handler for {} {}", request.method(), request.uri().path());
        return not_found().await;
    }

    match state.static_files.clone().oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
