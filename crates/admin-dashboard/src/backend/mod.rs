//! REST backend seam shared by both screens.
//!
//! The workflows only see the repository traits declared next to them; this
//! module owns the error vocabulary every implementation reports with and the
//! `reqwest` client that talks to the real service.

mod http;

pub use http::HttpBackend;

use serde::Deserialize;

/// Message the backend attaches to a `400` when a vendor email is taken.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists";

/// Failure reported by a backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Transport(String),
    #[error("backend rejected the request with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl BackendError {
    /// Server-provided explanation, when the error body carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            BackendError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// True only for the `400 {message: "Email already exists"}` conflict.
    pub fn is_duplicate_email(&self) -> bool {
        matches!(
            self,
            BackendError::Rejected {
                status: 400,
                message: Some(message),
            } if message == DUPLICATE_EMAIL_MESSAGE
        )
    }
}

/// Shape of the JSON error body the backend sends alongside non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub(crate) message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_requires_bad_request_and_exact_message() {
        let conflict = BackendError::Rejected {
            status: 400,
            message: Some("Email already exists".to_string()),
        };
        assert!(conflict.is_duplicate_email());
        assert_eq!(conflict.message(), Some("Email already exists"));

        let other_message = BackendError::Rejected {
            status: 400,
            message: Some("UPI already exists".to_string()),
        };
        assert!(!other_message.is_duplicate_email());

        let wrong_status = BackendError::Rejected {
            status: 409,
            message: Some("Email already exists".to_string()),
        };
        assert!(!wrong_status.is_duplicate_email());

        assert!(!BackendError::Transport("connection refused".to_string()).is_duplicate_email());
    }
}
