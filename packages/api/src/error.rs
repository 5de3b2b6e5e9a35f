//! Errors returned by [`crate::ApiClient`].

use thiserror::Error;

use crate::messages::Message;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller's cancellation token fired before the response arrived.
    #[error("request cancelled")]
    Cancelled,

    /// Network, CORS or request-building failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend refused the input (400, 409, 422).
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// Any other non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body did not match the expected schema.
    #[error("unexpected response from {endpoint}: {source}")]
    UnexpectedResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// Text to show the user, or `None` for a cancellation.
    ///
    /// Rejections carry the backend's own message when it sent one; every
    /// other failure shows `fallback`.
    pub fn user_message(&self, fallback: Message) -> Option<String> {
        match self {
            ApiError::Cancelled => None,
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.clone()),
            _ => Some(fallback.text().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_has_no_message() {
        assert_eq!(ApiError::Cancelled.user_message(Message::SystemError), None);
        assert!(ApiError::Cancelled.is_cancelled());
    }

    #[test]
    fn test_rejection_uses_backend_message() {
        let err = ApiError::Rejected {
            status: 400,
            message: Some("User not found".to_string()),
        };
        assert_eq!(
            err.user_message(Message::DeleteFailed).as_deref(),
            Some("User not found")
        );
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        let err = ApiError::Rejected {
            status: 400,
            message: Some("  ".to_string()),
        };
        assert_eq!(
            err.user_message(Message::DeleteFailed).as_deref(),
            Some(Message::DeleteFailed.text())
        );
    }

    #[test]
    fn test_other_failures_use_fallback() {
        let err = ApiError::Status(500);
        assert_eq!(
            err.user_message(Message::SystemError).as_deref(),
            Some(Message::SystemError.text())
        );
    }
}
