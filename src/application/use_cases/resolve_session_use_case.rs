//! Launch-time session gate.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::TokenSource;
use crate::application::services::SessionManager;
use crate::domain::entities::AuthToken;
use crate::domain::ports::TokenStoragePort;
use crate::domain::route::Route;

/// Decides the first route from the persisted credential.
///
/// No validation happens here; a stale token is discovered by the first
/// authenticated request.
#[derive(Clone)]
pub struct ResolveSessionUseCase {
    storage_port: Arc<dyn TokenStoragePort>,
    session: SessionManager,
}

impl ResolveSessionUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(storage_port: Arc<dyn TokenStoragePort>, session: SessionManager) -> Self {
        Self {
            storage_port,
            session,
        }
    }

    /// Looks up the keyring, then the command-line/env token.
    ///
    /// A failed lookup is treated like a missing token.
    pub async fn execute(&self, cli_token: Option<String>) -> Route {
        match self.resolve(cli_token).await {
            Some((token, source)) => {
                info!(%source, "Found existing session token");
                self.session.adopt(token);
                Route::Home
            }
            None => {
                debug!("No session token found");
                self.session.set_anonymous();
                Route::Login
            }
        }
    }

    async fn resolve(&self, cli_token: Option<String>) -> Option<(AuthToken, TokenSource)> {
        match self.storage_port.get_token().await {
            Ok(Some(token)) => return Some((token, TokenSource::Keyring)),
            Ok(None) => debug!("No token in credential store"),
            Err(e) => warn!(error = %e, "Failed to read credential store"),
        }

        cli_token
            .and_then(AuthToken::new)
            .map(|token| (token, TokenSource::CommandLine))
    }
}
