use serde_json::Value;
use thiserror::Error;

use super::Envelope;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport 401. The gateway has already torn the session down by the
    /// time this reaches a caller.
    #[error("unauthorized - session has been cleared")]
    Unauthorized,

    /// Transport 403. Insufficient privilege; the session is preserved.
    #[error("access denied")]
    Forbidden,

    /// Transport succeeded but the envelope code is outside [200, 299].
    #[error("{}", envelope_display(*.code, .message.as_deref()))]
    Envelope { code: i64, message: Option<String> },

    /// Any other non-2xx transport status. The message is rewritten from
    /// the envelope `message` when the body carries one.
    #[error("{message}")]
    Transport { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

fn envelope_display(code: i64, message: Option<&str>) -> String {
    match message {
        Some(message) => message.to_string(),
        None => format!("request failed with code {}", code),
    }
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data.
    /// The cut is backed off to a char boundary so multi-byte bodies
    /// (localized proxy error pages, say) never panic the slice.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..end],
            body.len()
        )
    }

    /// Classify a non-2xx transport reply that is neither 401 nor 403.
    ///
    /// When the body is an envelope with a `message`, that message becomes
    /// the error's display text so callers have one place to read a
    /// human-readable reason; otherwise a truncated body excerpt is used.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let envelope_message = serde_json::from_str::<Envelope<Value>>(body)
            .ok()
            .and_then(|envelope| envelope.message);

        let message = match envelope_message {
            Some(message) => message,
            None if body.is_empty() => format!("request failed with status {}", status),
            None => format!("status {}: {}", status, Self::truncate_body(body)),
        };

        ApiError::Transport {
            status: status.as_u16(),
            message,
        }
    }
}
