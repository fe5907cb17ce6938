//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Default upstream origin
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Main application configuration
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Gemini API configuration
    pub gemini: GeminiConfig,
    /// Request configuration
    pub request: RequestConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Root directory for static files
    pub static_dir: PathBuf,
}

/// Gemini API configuration
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key, `None` when unset or empty
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
}

/// Request configuration
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Maximum request size in bytes
    pub max_request_size: usize,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: PathBuf::from("."),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

// The key must never end up in logs, so Debug is written by hand.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            max_request_size: 10 * 1024 * 1024,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Settings {
    /// Create a new configuration instance from the environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            server: ServerConfig {
                host: get_env_or_default("SERVER_HOST", "0.0.0.0"),
                port: get_env_or_default("SERVER_PORT", "5000")
                    .parse()
                    .context("Invalid port number")?,
                static_dir: PathBuf::from(get_env_or_default("STATIC_DIR", ".")),
            },
            gemini: GeminiConfig {
                api_key: std::env::var("GEMINI_API_KEY")
                    .ok()
                    .filter(|key| !key.is_empty()),
                base_url: get_env_or_default("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL)
                    .trim_end_matches('/')
                    .to_string(),
            },
            request: RequestConfig {
                max_request_size: get_env_or_default("MAX_REQUEST_SIZE", "10485760")
                    .parse()
                    .context("Invalid maximum request size")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        if !self.gemini.base_url.starts_with("http") {
            anyhow::bail!("Invalid Gemini base URL format, should start with 'http'");
        }

        if self.request.max_request_size == 0 {
            anyhow::bail!("Maximum request size cannot be 0");
        }

        EnvFilter::try_new(&self.logging.level)
            .with_context(|| format!("Invalid log filter: {}", self.logging.level))?;

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Listen address in `host:port` form
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Whether the proxy endpoint can reach upstream
    pub fn has_api_key(&self) -> bool {
        self.gemini.api_key.is_some()
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
