//! Gemini Chat Proxy Server
//!
//! Serves the chat front-end from the working directory and proxies `/api/chat`
//! to the Gemini API without exposing the API key to the browser

use anyhow::{Context, Result};
use gemini_chat_proxy::utils::logging::init_logging;
use gemini_chat_proxy::{create_router, version_info, Settings, CHAT_PATH};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load settings from environment (and .env, if present)
    let settings = Settings::new().context("Failed to load server settings")?;

    init_logging(&settings.logging)?;
    info!("{}", version_info());

    if !settings.has_api_key() {
        warn!("GEMINI_API_KEY is not set, {} will answer with a configuration error", CHAT_PATH);
    }

    let addr = settings.bind_address();
    let static_dir = settings.server.static_dir.clone();

    let app = create_router(settings)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 Server running at http://{}", addr);
    info!("📁 Serving static files from {}", static_dir.display());
    info!("🔄 Proxy endpoint: http://{}{}", addr, CHAT_PATH);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    Ok(())
}
