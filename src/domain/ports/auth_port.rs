//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{AuthToken, Credentials};
use crate::domain::errors::AuthError;

/// Port for exchanging credentials for a session token.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Submits credentials and returns the issued token.
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, AuthError>;
}

/// Hand-written [`AuthPort`] double that records calls.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    /// Mock authentication port for testing.
    pub struct MockAuthPort {
        outcome: Mutex<Option<AuthError>>,
        calls: Arc<AtomicUsize>,
    }

    impl MockAuthPort {
        /// Creates mock that accepts every login.
        pub fn accepting() -> Self {
            Self {
                outcome: Mutex::new(None),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        /// Creates mock that fails with the given error.
        pub fn failing(error: AuthError) -> Self {
            Self {
                outcome: Mutex::new(Some(error)),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        /// Number of login requests received.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AuthPort for MockAuthPort {
        async fn login(&self, _credentials: &Credentials) -> Result<AuthToken, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome.lock().await.take() {
                Some(error) => Err(error),
                None => Ok(AuthToken::new_unchecked("mock-session-token")),
            }
        }
    }
}
