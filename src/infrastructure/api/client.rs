//! HTTP client for the learning backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, header};
use tracing::{debug, info, warn};

use super::dto::{ErrorResponse, LoginBody, LoginResponse, ProfileResponse};
use crate::domain::entities::{AuthToken, Credentials, UserProfile};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthPort, ProfilePort, ProfileUpdate};

const USER_AGENT: &str = concat!("studyline/", env!("CARGO_PKG_VERSION"));

/// Which kind of endpoint produced a status; 401 means different things.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// `POST /login`.
    Login,
    /// Any endpoint called with the bearer token.
    Authenticated,
}

/// Maps a non-success status to a domain error.
///
/// On login, 401 means a wrong password and 404 an unknown account. On
/// authenticated endpoints, 401 means the token is no longer accepted.
#[must_use]
pub fn error_for_status(
    kind: RequestKind,
    status: StatusCode,
    message: Option<String>,
) -> AuthError {
    match (kind, status) {
        (RequestKind::Login, StatusCode::UNAUTHORIZED) => AuthError::InvalidCredentials,
        (RequestKind::Login, StatusCode::NOT_FOUND) => AuthError::UserNotFound,
        (RequestKind::Authenticated, StatusCode::UNAUTHORIZED) => AuthError::SessionExpired,
        _ => {
            let message = message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            AuthError::server(status.as_u16(), message)
        }
    }
}

fn transport_error(e: &reqwest::Error) -> AuthError {
    if e.is_timeout() {
        AuthError::network("request timed out")
    } else if e.is_connect() {
        AuthError::network("failed to connect to the server")
    } else {
        AuthError::network(e.to_string())
    }
}

/// REST client for login and profile endpoints.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates client for the given backend.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AuthError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::unexpected(format!("failed to create HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!(base_url = %base_url, "API client ready");

        Ok(Self { client, base_url })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn check(kind: RequestKind, response: Response) -> Result<Response, AuthError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.message);
        warn!(status = %status, ?kind, "Request rejected");
        Err(error_for_status(kind, status, message))
    }
}

#[async_trait]
impl AuthPort for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, AuthError> {
        debug!(email = %credentials.email(), "Submitting login");

        let response = self
            .client
            .post(self.url("/login"))
            .json(&LoginBody {
                email: credentials.email(),
                password: credentials.password(),
            })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Login request failed");
                transport_error(&e)
            })?;

        let response = Self::check(RequestKind::Login, response).await?;

        let body: LoginResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse login response");
            AuthError::unexpected(format!("failed to parse response: {e}"))
        })?;

        let token = body
            .token
            .and_then(AuthToken::new)
            .ok_or(AuthError::MissingToken)?;

        info!(token = %token, "Login succeeded");
        Ok(token)
    }
}

#[async_trait]
impl ProfilePort for ApiClient {
    async fn fetch_profile(&self, token: &AuthToken) -> Result<Option<UserProfile>, AuthError> {
        debug!("Fetching profile");

        let response = self
            .client
            .get(self.url("/api/user/profile"))
            .header(header::AUTHORIZATION, token.bearer())
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let response = Self::check(RequestKind::Authenticated, response).await?;
        let body = response.text().await.map_err(|e| transport_error(&e))?;

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            warn!("Profile response carried no data");
            return Ok(None);
        }

        let profile = serde_json::from_str::<ProfileResponse>(trimmed)
            .map_err(|e| AuthError::unexpected(format!("failed to parse profile: {e}")))?
            .into_profile();

        debug!(name = %profile.name(), "Profile loaded");
        Ok(Some(profile))
    }

    async fn update_profile(
        &self,
        token: &AuthToken,
        update: &ProfileUpdate,
    ) -> Result<(), AuthError> {
        debug!(
            name_changed = update.name.is_some(),
            email_changed = update.email.is_some(),
            "Updating profile"
        );

        let response = self
            .client
            .put(self.url("/api/user/update"))
            .header(header::AUTHORIZATION, token.bearer())
            .json(update)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        Self::check(RequestKind::Authenticated, response).await?;
        info!("Profile updated");
        Ok(())
    }
}
