//! Error types for catalog retrieval and clipboard access.

use thiserror::Error;

use crate::constants::DEFAULT_LOAD_ERROR;

/// Failure while retrieving the model catalog.
///
/// These are the only failures shown to the user; they end up as the
/// message of the catalog's error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Server answered with a non-success status
    #[error("Request failed with status {status} {reason}")]
    Status { status: u16, reason: String },

    /// Connection, DNS, TLS or timeout failure
    #[error("{0}")]
    Transport(String),

    /// Response body could not be read
    #[error("Failed to read catalog response: {0}")]
    Read(String),

    /// Response body was not JSON
    #[error("Failed to decode catalog response: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Human-readable message for the error state, never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        let trimmed = message.trim();
        if trimmed.is_empty() {
            DEFAULT_LOAD_ERROR.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// Failure while writing to the system clipboard. Logged, never shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write denied")]
    Denied,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_uses_display_text() {
        let err = CatalogError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), "connection refused");
    }

    #[test]
    fn test_user_message_falls_back_when_empty() {
        let err = CatalogError::Transport(String::new());
        assert_eq!(err.user_message(), DEFAULT_LOAD_ERROR);

        let err = CatalogError::Transport("   ".to_string());
        assert_eq!(err.user_message(), DEFAULT_LOAD_ERROR);
    }

    #[test]
    fn test_status_message_includes_code() {
        let err = CatalogError::Status {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Request failed with status 503 Service Unavailable"
        );
    }
}
