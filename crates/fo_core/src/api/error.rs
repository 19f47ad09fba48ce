//! Error types for the analysis service client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from talking to the analysis service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body could not be decoded as the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Non-success status from the service, with the parsed `detail`
    /// message when the error envelope was readable.
    #[error("service returned {status}: {}", .detail.as_deref().unwrap_or("no error detail"))]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
}

impl ApiError {
    /// Create a status error from a response status and optional detail.
    pub fn status(status: StatusCode, detail: Option<String>) -> Self {
        Self::Status { status, detail }
    }

    /// Server-supplied error detail, when present.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message to surface to the user.
    ///
    /// Prefers the service's own detail; a status without detail falls back
    /// to the caller's operation-specific message; transport and decode
    /// failures report themselves.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Status { detail: None, .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_detail() {
        let err = ApiError::status(StatusCode::BAD_REQUEST, Some("no data".to_string()));
        assert_eq!(err.user_message("Failed to analyze data"), "no data");
    }

    #[test]
    fn user_message_falls_back_without_detail() {
        let err = ApiError::status(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(
            err.user_message("Failed to analyze data"),
            "Failed to analyze data"
        );
    }

    #[test]
    fn status_error_displays_detail() {
        let err = ApiError::status(StatusCode::NOT_FOUND, Some("File not found".to_string()));
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("File not found"));
    }
}
