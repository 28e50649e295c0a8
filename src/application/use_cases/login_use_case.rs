//! Login use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{LoginRequest, LoginResponse};
use crate::application::services::SessionManager;
use crate::domain::entities::Credentials;
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Handles the credential login workflow.
#[derive(Clone)]
pub struct LoginUseCase {
    auth_port: Arc<dyn AuthPort>,
    session: SessionManager,
}

impl LoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub fn new(auth_port: Arc<dyn AuthPort>, session: SessionManager) -> Self {
        Self { auth_port, session }
    }

    /// Executes login with provided request.
    ///
    /// Invalid input is rejected before any request is sent.
    ///
    /// # Errors
    /// Returns error if the form is invalid or the backend rejects the login.
    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, AuthError> {
        let credentials =
            Credentials::new(request.email.as_str(), request.password.as_str()).map_err(|e| {
                debug!(error = %e, "Login form rejected");
                e
            })?;

        debug!(email = %credentials.email(), "Attempting login");

        let token = self.auth_port.login(&credentials).await.map_err(|e| {
            warn!(error = %e, "Login failed");
            e
        })?;

        info!(email = %credentials.email(), "Successfully authenticated");

        let token_persisted = self.session.sign_in(token, request.persist_token).await;

        Ok(LoginResponse { token_persisted })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::SessionState;
    use crate::domain::errors::ValidationError;
    use crate::domain::ports::TokenStoragePort;
    use crate::domain::ports::mocks::{MockAuthPort, MockTokenStorage};

    fn setup(auth: MockAuthPort) -> (LoginUseCase, Arc<MockAuthPort>, Arc<MockTokenStorage>) {
        let auth = Arc::new(auth);
        let storage = Arc::new(MockTokenStorage::new());
        let session = SessionManager::new(storage.clone());
        (LoginUseCase::new(auth.clone(), session), auth, storage)
    }

    #[tokio::test]
    async fn test_successful_login() {
        let (use_case, auth, storage) = setup(MockAuthPort::accepting());

        let response = use_case
            .execute(LoginRequest::new("ana@example.com", "hunter2"))
            .await
            .unwrap();

        assert!(response.token_persisted);
        assert_eq!(auth.calls(), 1);
        assert!(storage.has_token().await.unwrap());
        assert!(use_case.session.state().is_authenticated());
    }

    #[tokio::test]
    async fn test_empty_password_makes_no_request() {
        let (use_case, auth, storage) = setup(MockAuthPort::accepting());

        let result = use_case
            .execute(LoginRequest::new("ana@example.com", ""))
            .await;

        assert!(matches!(
            result,
            Err(AuthError::Validation(ValidationError::EmptyField { field: "password" }))
        ));
        assert_eq!(auth.calls(), 0);
        assert!(!storage.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let (use_case, _, storage) = setup(MockAuthPort::failing(AuthError::InvalidCredentials));

        let result = use_case
            .execute(LoginRequest::new("ana@example.com", "wrong"))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(!storage.has_token().await.unwrap());
        assert_eq!(use_case.session.state(), SessionState::Unknown);
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let (use_case, _, _) = setup(MockAuthPort::failing(AuthError::UserNotFound));

        let result = use_case
            .execute(LoginRequest::new("nobody@example.com", "pw"))
            .await;

        assert!(matches!(result, Err(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_login_without_persistence() {
        let (use_case, _, storage) = setup(MockAuthPort::accepting());

        let response = use_case
            .execute(LoginRequest::new("ana@example.com", "hunter2").without_persistence())
            .await
            .unwrap();

        assert!(!response.token_persisted);
        assert!(!storage.has_token().await.unwrap());
        assert!(use_case.session.token().is_some());
    }
}
