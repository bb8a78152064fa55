//! Auth sub-client: install, inspect and drop the admin token.

use chrono::Utc;

use crate::auth::{AdminToken, AuthCredentials};
use crate::client::GdMatkaClient;
use crate::error::SdkError;

/// Sub-client for authentication state.
pub struct Auth<'a> {
    pub(crate) client: &'a GdMatkaClient,
}

impl<'a> Auth<'a> {
    /// Use `raw` for every following request. Accepts a bare token or a full
    /// `Bearer <token>` value.
    ///
    /// The token is not checked against the backend; a bad one surfaces as
    /// `HttpError::Unauthorized` on the next request.
    pub async fn use_token(&self, raw: &str) -> Result<AuthCredentials, SdkError> {
        let token = AdminToken::new(raw)?;
        self.client.http.set_auth_token(Some(token)).await;

        let credentials = AuthCredentials { since: Utc::now() };
        *self.client.credentials.write().await = Some(credentials.clone());
        tracing::debug!("Admin token installed");
        Ok(credentials)
    }

    /// Clears the token, the session view and all caches.
    pub async fn logout(&self) {
        self.client.http.clear_auth_token().await;
        *self.client.credentials.write().await = None;
        self.client.clear_all_caches().await;
        tracing::debug!("Admin token cleared");
    }

    /// Get current auth credentials (if authenticated).
    pub async fn credentials(&self) -> Option<AuthCredentials> {
        self.client.credentials.read().await.clone()
    }

    /// Whether a token is installed. Says nothing about whether the backend
    /// still accepts it.
    pub async fn is_authenticated(&self) -> bool {
        self.client.http.has_auth_token().await
    }
}
