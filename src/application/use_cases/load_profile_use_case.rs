//! Profile loading use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::ProfileLoad;
use crate::application::services::SessionManager;
use crate::domain::errors::AuthError;
use crate::domain::ports::ProfilePort;

/// Fetches the signed-in user's profile for the profile screen.
#[derive(Clone)]
pub struct LoadProfileUseCase {
    profile_port: Arc<dyn ProfilePort>,
    session: SessionManager,
}

impl LoadProfileUseCase {
    /// Creates the use case.
    #[must_use]
    pub fn new(profile_port: Arc<dyn ProfilePort>, session: SessionManager) -> Self {
        Self {
            profile_port,
            session,
        }
    }

    /// Loads the profile.
    ///
    /// An unauthorized response signs the session out and yields
    /// [`ProfileLoad::SessionEnded`].
    ///
    /// # Errors
    /// Returns network and server errors; the session stays signed in.
    pub async fn execute(&self) -> Result<ProfileLoad, AuthError> {
        let Some(token) = self.session.token() else {
            debug!("No session token, profile not requested");
            return Ok(ProfileLoad::SessionEnded);
        };

        match self.profile_port.fetch_profile(&token).await {
            Ok(Some(profile)) => {
                info!("Profile loaded");
                Ok(ProfileLoad::Loaded(profile))
            }
            Ok(None) => {
                warn!("Profile response carried no data");
                Ok(ProfileLoad::Empty)
            }
            Err(e) if e.is_unauthorized() => {
                self.session.invalidate().await;
                Ok(ProfileLoad::SessionEnded)
            }
            Err(e) => {
                warn!(error = %e, "Failed to load profile");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::SessionState;
    use crate::domain::entities::{AuthToken, UserProfile};
    use crate::domain::ports::TokenStoragePort;
    use crate::domain::ports::mocks::{MockProfilePort, MockTokenStorage};

    fn signed_in(
        port: MockProfilePort,
    ) -> (LoadProfileUseCase, SessionManager, Arc<MockTokenStorage>) {
        let token = AuthToken::new_unchecked("session-token");
        let storage = Arc::new(MockTokenStorage::with_token(token.clone()));
        let session = SessionManager::new(storage.clone());
        session.adopt(token);
        (
            LoadProfileUseCase::new(Arc::new(port), session.clone()),
            session,
            storage,
        )
    }

    #[tokio::test]
    async fn test_profile_loaded() {
        let mut port = MockProfilePort::new();
        port.expect_fetch_profile()
            .withf(|token| token.as_str() == "session-token")
            .times(1)
            .returning(|_| Ok(Some(UserProfile::new("Ana", "ana@example.com"))));
        let (use_case, _, _) = signed_in(port);

        let load = use_case.execute().await.unwrap();
        assert_eq!(
            load,
            ProfileLoad::Loaded(UserProfile::new("Ana", "ana@example.com"))
        );
    }

    #[tokio::test]
    async fn test_missing_profile_data() {
        let mut port = MockProfilePort::new();
        port.expect_fetch_profile().returning(|_| Ok(None));
        let (use_case, session, _) = signed_in(port);

        assert_eq!(use_case.execute().await.unwrap(), ProfileLoad::Empty);
        assert!(session.state().is_authenticated());
    }

    #[tokio::test]
    async fn test_unauthorized_clears_token_and_redirects_once() {
        let mut port = MockProfilePort::new();
        port.expect_fetch_profile()
            .times(1)
            .returning(|_| Err(AuthError::SessionExpired));
        let (use_case, session, storage) = signed_in(port);
        let mut rx = session.subscribe();
        rx.mark_unchanged();

        assert_eq!(use_case.execute().await.unwrap(), ProfileLoad::SessionEnded);
        assert!(!storage.has_token().await.unwrap());
        assert_eq!(storage.deletes(), 1);

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), SessionState::Anonymous);

        // No token left, so a second load neither calls the API nor re-publishes.
        assert_eq!(use_case.execute().await.unwrap(), ProfileLoad::SessionEnded);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_network_error_keeps_session() {
        let mut port = MockProfilePort::new();
        port.expect_fetch_profile()
            .returning(|_| Err(AuthError::network("timed out")));
        let (use_case, session, storage) = signed_in(port);

        assert!(matches!(
            use_case.execute().await,
            Err(AuthError::NetworkError { .. })
        ));
        assert!(session.state().is_authenticated());
        assert!(storage.has_token().await.unwrap());
    }
}
