//! Process-wide session state.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::domain::entities::AuthToken;
use crate::domain::errors::AuthError;
use crate::domain::ports::TokenStoragePort;
use crate::domain::route::Route;

/// Authentication status shared with every screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Persisted credential not looked up yet.
    #[default]
    Unknown,
    /// No usable token; the login screen is shown.
    Anonymous,
    /// Signed in with this token.
    Authenticated(AuthToken),
}

impl SessionState {
    /// Route implied by this state, if decided.
    #[must_use]
    pub const fn route(&self) -> Option<Route> {
        match self {
            Self::Unknown => None,
            Self::Anonymous => Some(Route::Login),
            Self::Authenticated(_) => Some(Route::Home),
        }
    }

    /// Returns `true` when a token is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Owns the session token and broadcasts changes to subscribers.
///
/// Screens read the token from here instead of the credential store; the store
/// is touched only on sign-in, sign-out and invalidation.
#[derive(Clone)]
pub struct SessionManager {
    storage: Arc<dyn TokenStoragePort>,
    state: Arc<watch::Sender<SessionState>>,
}

impl SessionManager {
    /// Starts in [`SessionState::Unknown`].
    #[must_use]
    pub fn new(storage: Arc<dyn TokenStoragePort>) -> Self {
        let (state, _) = watch::channel(SessionState::Unknown);
        Self {
            storage,
            state: Arc::new(state),
        }
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Current token, if signed in.
    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        match &*self.state.borrow() {
            SessionState::Authenticated(token) => Some(token.clone()),
            _ => None,
        }
    }

    /// Publishes an already-persisted (or ephemeral) token.
    pub fn adopt(&self, token: AuthToken) {
        debug!(token = %token, "Adopting session token");
        self.state.send_replace(SessionState::Authenticated(token));
    }

    /// Marks the session as signed out without touching storage.
    pub fn set_anonymous(&self) {
        self.state.send_replace(SessionState::Anonymous);
    }

    /// Publishes a fresh token, persisting it first when requested.
    ///
    /// Returns whether the token was persisted. A storage failure still signs
    /// the user in for the current run.
    pub async fn sign_in(&self, token: AuthToken, persist: bool) -> bool {
        let persisted = if persist {
            match self.storage.store_token(&token).await {
                Ok(()) => {
                    info!("Session token persisted");
                    true
                }
                Err(e) => {
                    error!(error = %e, "Failed to persist session token");
                    false
                }
            }
        } else {
            debug!("Token persistence disabled, skipping storage");
            false
        };

        self.adopt(token);
        persisted
    }

    /// Deletes the stored token and signs out.
    ///
    /// # Errors
    /// Returns error if the credential store refuses the deletion; the session
    /// is signed out regardless.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let result = self.storage.delete_token().await;
        self.set_anonymous();

        match &result {
            Ok(()) => info!("Signed out"),
            Err(e) => error!(error = %e, "Failed to delete token on sign out"),
        }
        result
    }

    /// Drops a token the backend rejected.
    ///
    /// Only the first call for a given session has an effect, so concurrent
    /// unauthorized responses redirect to login once.
    pub async fn invalidate(&self) -> bool {
        let changed = self.state.send_if_modified(|state| {
            if state.is_authenticated() {
                *state = SessionState::Anonymous;
                true
            } else {
                false
            }
        });

        if !changed {
            debug!("Session already invalidated");
            return false;
        }

        warn!("Session token rejected, clearing it");
        if let Err(e) = self.storage.delete_token().await {
            error!(error = %e, "Failed to remove rejected token");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockTokenStorage;

    fn token() -> AuthToken {
        AuthToken::new_unchecked("session-token-value")
    }

    #[tokio::test]
    async fn test_sign_in_persists_and_publishes() {
        let storage = Arc::new(MockTokenStorage::new());
        let session = SessionManager::new(storage.clone());
        let rx = session.subscribe();

        assert!(session.sign_in(token(), true).await);
        assert!(storage.has_token().await.unwrap());
        assert_eq!(*rx.borrow(), SessionState::Authenticated(token()));
        assert_eq!(session.state().route(), Some(Route::Home));
    }

    #[tokio::test]
    async fn test_sign_in_without_persistence() {
        let storage = Arc::new(MockTokenStorage::new());
        let session = SessionManager::new(storage.clone());

        assert!(!session.sign_in(token(), false).await);
        assert!(!storage.has_token().await.unwrap());
        assert_eq!(session.token(), Some(token()));
    }

    #[tokio::test]
    async fn test_invalidate_happens_once() {
        let storage = Arc::new(MockTokenStorage::with_token(token()));
        let session = SessionManager::new(storage.clone());
        session.adopt(token());
        let mut rx = session.subscribe();
        rx.mark_unchanged();

        assert!(session.invalidate().await);
        assert!(!session.invalidate().await);

        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();
        assert!(!rx.has_changed().unwrap());
        assert_eq!(storage.deletes(), 1);
        assert!(!storage.has_token().await.unwrap());
        assert_eq!(session.state().route(), Some(Route::Login));
    }

    #[tokio::test]
    async fn test_sign_out_clears_token() {
        let storage = Arc::new(MockTokenStorage::with_token(token()));
        let session = SessionManager::new(storage.clone());
        session.adopt(token());

        session.sign_out().await.unwrap();
        assert!(session.token().is_none());
        assert!(!storage.has_token().await.unwrap());
    }

    #[test]
    fn test_unknown_state_has_no_route() {
        assert_eq!(SessionState::Unknown.route(), None);
    }
}
