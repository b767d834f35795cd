//! Error taxonomy for every request the front-end makes.

use thiserror::Error;

/// Message shown when the server cannot be reached at all.
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach the server. Please check your connection.";

/// Message shown for a 404 response.
pub const NOT_FOUND_MESSAGE: &str = "The requested content could not be found.";

/// Failure of a fetch or submission.
///
/// Views never render the `Debug` form; they call [`ApiError::user_message`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered 404.
    #[error("not found")]
    NotFound,

    /// Any other non-2xx status, with the server's `error`/`message` field if it sent one.
    #[error("request failed with status {status}")]
    Http { status: u16, message: Option<String> },

    /// A 2xx response whose body could not be used.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Rejected on the client before any request was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Human-readable text for display in a view.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => UNREACHABLE_MESSAGE.to_string(),
            ApiError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Http {
                status,
                message: None,
            } => format!("Request failed with status {status}"),
            ApiError::Malformed(detail) => format!("Unexpected response from the server: {detail}"),
            ApiError::Validation(message) => message.clone(),
        }
    }

    /// Whether the server rejected the session credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }

    /// Whether the failure happened before reaching the server.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let network = ApiError::Network("connection refused".into()).user_message();
        let not_found = ApiError::NotFound.user_message();
        let http = ApiError::Http {
            status: 500,
            message: None,
        }
        .user_message();

        assert_ne!(network, not_found);
        assert_ne!(network, http);
        assert_ne!(not_found, http);
        assert_eq!(http, "Request failed with status 500");
    }

    #[test]
    fn test_server_message_preferred() {
        let err = ApiError::Http {
            status: 401,
            message: Some("bad credentials".into()),
        };
        assert_eq!(err.user_message(), "bad credentials");
        assert!(err.is_unauthorized());
        assert!(!err.is_network());
    }
}
