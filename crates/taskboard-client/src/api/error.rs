//! API Errors
//!
//! `Display` of each variant is the message shown to the user.

use thiserror::Error;

use super::transport::TransportError;
use crate::session::SessionError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 on a request that carried a token; the session has been cleared
    #[error("Session expired. Please login again.")]
    AuthExpired,
    /// 401 on an anonymous request
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// 422
    #[error("{0}")]
    Validation(String),
    #[error("Resource not found")]
    NotFound,
    /// 500
    #[error("Server error occurred")]
    Server,
    /// Any other non-2xx status
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Transport failure, e.g. offline
    #[error("{0}")]
    Network(String),
    /// Success status but the body did not have the expected shape
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("Could not save session: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired)
    }

    /// HTTP status behind the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::AuthExpired | ApiError::InvalidCredentials => Some(401),
            ApiError::Validation(_) => Some(422),
            ApiError::NotFound => Some(404),
            ApiError::Server => Some(500),
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) | ApiError::Storage(_) => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::AuthExpired.to_string(), "Session expired. Please login again.");
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid email or password");
        assert_eq!(ApiError::NotFound.to_string(), "Resource not found");
        assert_eq!(ApiError::Server.to_string(), "Server error occurred");
        assert_eq!(
            ApiError::Http { status: 403, message: "Error: 403".to_string() }.to_string(),
            "Error: 403"
        );
    }

    #[test]
    fn test_status_categories() {
        assert_eq!(ApiError::InvalidCredentials.status(), Some(401));
        assert_eq!(ApiError::Validation("bad".into()).status(), Some(422));
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }
}
