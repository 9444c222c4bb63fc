//! Error types for the admin API client.

use thiserror::Error;

/// Result type for admin API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failed, request could not be sent, or body unreadable
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Operation needs a bearer token but the client has none
    #[error("Not authenticated")]
    Unauthenticated,
}

impl ApiError {
    /// Message suitable for a user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            ApiError::Api { status, .. } => format!("Request failed with status {}", status),
            ApiError::Network(_) => "Network error, please try again".to_string(),
            ApiError::Parse(_) => "Unexpected response from server".to_string(),
            ApiError::Unauthenticated => "Please login to continue".to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
