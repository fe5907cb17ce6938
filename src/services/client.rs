//! HTTP client service
//!
//! Encapsulates HTTP communication with the Gemini API

use crate::config::GeminiConfig;
use crate::utils::error::{AppError, AppResult};
use anyhow::{Context, Result};
use axum::body::Bytes;
use reqwest::Client;
use std::error::Error as StdError;
use tracing::{debug, error, warn};

/// Upstream API version segment
pub const GEMINI_API_VERSION: &str = "v1beta";

/// Upstream model identifier
pub const GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Successful upstream answer, relayed to the caller untouched
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    /// Upstream 2xx status
    pub status: u16,
    /// Raw response bytes
    pub body: Bytes,
}

/// Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client instance
    ///
    /// No request timeout is set; calls wait as long as the upstream takes.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("gemini-chat-proxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Configured credential
    pub fn api_key(&self) -> AppResult<&str> {
        self.config.api_key.as_deref().ok_or(AppError::MissingApiKey)
    }

    /// generateContent endpoint, without the credential
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.config.base_url, GEMINI_API_VERSION, GEMINI_MODEL
        )
    }

    /// Forward a chat payload to the generateContent endpoint
    ///
    /// The payload is sent exactly as parsed. Non-2xx answers become `AppError::Upstream`,
    /// anything else that goes wrong becomes `AppError::Internal`.
    pub async fn generate_content(
        &self,
        api_key: &str,
        payload: &serde_json::Value,
    ) -> AppResult<UpstreamReply> {
        let endpoint = self.endpoint();
        debug!("Sending Gemini generateContent request to {}", endpoint);

        let body = serde_json::to_vec(payload)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let response = self
            .client
            .post(&endpoint)
            .query(&[("key", api_key)])
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                let description = describe_transport_error(&e);
                error!("Gemini API request failed: {}", description);
                AppError::Internal(description)
            })?;

        let status = response.status();

        if status.is_success() {
            let body = response
                .bytes()
                .await
                .map_err(|e| AppError::Internal(describe_transport_error(&e)))?;

            debug!("Gemini request completed: {} ({} bytes)", status, body.len());
            Ok(UpstreamReply {
                status: status.as_u16(),
                body,
            })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {}: {}", status, error_text);
            Err(AppError::Upstream {
                status: status.as_u16(),
                body: error_text,
            })
        }
    }
}

/// Describe a reqwest failure with its source chain but without the request URL,
/// which carries the credential.
fn describe_transport_error(err: &reqwest::Error) -> String {
    let description = if err.is_connect() {
        "error connecting to upstream".to_string()
    } else if err.is_timeout() {
        "upstream request timed out".to_string()
    } else if err.is_body() || err.is_decode() {
        "error reading upstream response".to_string()
    } else {
        "error sending request to upstream".to_string()
    };

    append_source_chain(description, err.source())
}

/// Append each cause in the chain, skipping causes whose text an outer error already
/// included in its own message.
fn append_source_chain(
    mut description: String,
    mut source: Option<&(dyn StdError + 'static)>,
) -> String {
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }

    description
}
