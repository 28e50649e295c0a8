//! Secure credential store error types.

use thiserror::Error;

/// Failures reported by the platform credential store.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SecretError {
    #[error("failed to access secure storage: {0}")]
    AccessFailed(String),

    #[error("failed to read stored credential: {0}")]
    RetrievalFailed(String),

    #[error("failed to write credential: {0}")]
    StorageFailed(String),

    #[error("failed to delete credential: {0}")]
    DeletionFailed(String),
}
