//! Gemini Chat Proxy Library
//!
//! Static file server with a credential-injecting proxy for the Gemini generateContent API

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use handlers::{create_router, AppState, CHAT_PATH};
pub use services::{GeminiClient, UpstreamReply};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
