//! Error types for session persistence.

use thiserror::Error;

/// Failure talking to the durable key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store is not available (no window, storage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backing store rejected the operation (quota, security policy)
    #[error("storage operation on '{key}' failed: {message}")]
    Operation { key: String, message: String },
}

/// Why a persisted session could not be restored.
///
/// Every variant means the same thing to the session store: discard both
/// entries and start logged out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistError {
    #[error("no persisted value under '{key}'")]
    Missing { key: &'static str },

    #[error("persisted value under '{key}' is malformed: {reason}")]
    Malformed { key: &'static str, reason: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl PersistError {
    /// Whether this is the ordinary "never logged in" case rather than damage.
    pub fn is_missing(&self) -> bool {
        matches!(self, PersistError::Missing { .. })
    }
}
