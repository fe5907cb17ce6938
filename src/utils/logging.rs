//! Logging utilities
//!
//! Shared logging configuration and helper functions

use crate::config::LoggingConfig;
use anyhow::Result;
use serde_json::{json, Value};

/// Set to true to include full chat payloads in debug logs
/// Default is false to reduce log verbosity
pub const VERBOSE_REQUEST_LOGGING: bool = false;

/// Initialize logging system
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if config.format == "json" {
        // JSON format logs
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::info!("Logging system initialized");
    Ok(())
}

/// Truncate a string with a note about original length
fn truncate_content(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let dropped = s[cut..].chars().count();
            format!("{}... ({} chars truncated)", &s[..cut], dropped)
        }
        None => s.to_string(),
    }
}

/// Summarize one `contents` entry of a generateContent payload
fn summarize_content(content: &Value) -> Value {
    let parts: Vec<Value> = content["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .map(|part| match part["text"].as_str() {
                    Some(text) => json!({ "text": truncate_content(text, 200) }),
                    None => json!("[non-text part]"),
                })
                .collect()
        })
        .unwrap_or_default();

    json!({
        "role": content["role"],
        "parts": parts,
    })
}

/// Create a filtered summary of a chat payload for logging
///
/// The payload is opaque to the proxy, so anything that does not look like a
/// generateContent request is only described by its shape.
pub fn create_payload_log_summary(payload: &Value) -> Value {
    if VERBOSE_REQUEST_LOGGING {
        return payload.clone();
    }

    match payload.get("contents").and_then(Value::as_array) {
        Some(contents) => {
            let recent: Vec<Value> = contents
                .iter()
                .rev()
                .take(3)
                .rev()
                .map(summarize_content)
                .collect();

            let mut summary = json!({
                "contents_count": contents.len(),
                "recent_contents": recent,
            });
            if payload.get("systemInstruction").is_some() {
                summary["systemInstruction"] = json!("[present]");
            }
            if let Some(config) = payload.get("generationConfig") {
                summary["generationConfig"] = config.clone();
            }
            summary
        }
        None => json!({ "type": json_type_name(payload) }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_content_respects_char_boundaries() {
        assert_eq!(truncate_content("hello", 10), "hello");
        assert_eq!(truncate_content("héllo wörld", 3), "hél... (8 chars truncated)");
    }

    #[test]
    fn test_payload_summary_keeps_last_three_contents() {
        let payload = json!({
            "contents": [
                {"role": "user", "parts": [{"text": "one"}]},
                {"role": "model", "parts": [{"text": "two"}]},
                {"role": "user", "parts": [{"text": "three"}]},
                {"role": "model", "parts": [{"inlineData": {}}]},
            ],
            "systemInstruction": {"parts": [{"text": "be nice"}]},
        });

        let summary = create_payload_log_summary(&payload);
        assert_eq!(summary["contents_count"], 4);
        assert_eq!(summary["recent_contents"].as_array().unwrap().len(), 3);
        assert_eq!(summary["recent_contents"][0]["parts"][0]["text"], "two");
        assert_eq!(summary["recent_contents"][2]["parts"][0], "[non-text part]");
        assert_eq!(summary["systemInstruction"], "[present]");
    }

    #[test]
    fn test_payload_summary_for_unknown_shape() {
        assert_eq!(create_payload_log_summary(&json!([1, 2]))["type"], "array");
    }
}
