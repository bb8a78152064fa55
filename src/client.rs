//! High-level client — `GdMatkaClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::auth::client::Auth;
use crate::auth::{AdminToken, AuthCredentials};
use crate::domain::bid::client::Bets;
use crate::domain::limits::client::{Limits, Settings};
use crate::domain::market::client::Markets;
use crate::domain::market::Market;
use crate::domain::notice::client::Notices;
use crate::domain::user::client::Users;
use crate::error::{AuthError, SdkError};
use crate::http::{GdMatkaHttp, RetryPolicy};

use async_lock::RwLock;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::bid::client::Bets as BetsClient;
pub use crate::domain::limits::client::Limits as LimitsClient;
pub use crate::domain::limits::client::Settings as SettingsClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::notice::client::Notices as NoticesClient;
pub use crate::domain::user::client::Users as UsersClient;

/// The primary entry point for the GD Matka admin SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.markets()`, `client.users()`, etc.
pub struct GdMatkaClient {
    pub(crate) http: GdMatkaHttp,
    /// Public view of the session.
    pub(crate) credentials: Arc<RwLock<Option<AuthCredentials>>>,
    /// Market list cache: (markets, fetched_at)
    pub(crate) market_cache: Arc<RwLock<Option<(Vec<Market>, Instant)>>>,
    /// Bumped on every invalidation, under the cache write lock.
    pub(crate) market_cache_generation: Arc<AtomicU64>,
    /// Cache TTL for the market list
    pub(crate) market_cache_ttl: Duration,
}

impl GdMatkaClient {
    pub fn builder() -> GdMatkaClientBuilder {
        GdMatkaClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn limits(&self) -> Limits<'_> {
        Limits { client: self }
    }

    pub fn settings(&self) -> Settings<'_> {
        Settings { client: self }
    }

    pub fn notices(&self) -> Notices<'_> {
        Notices { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn bets(&self) -> Bets<'_> {
        Bets { client: self }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Mutations call this first so they never reach the network without a token.
    pub(crate) async fn ensure_authenticated(&self) -> Result<(), SdkError> {
        if self.http.has_auth_token().await {
            Ok(())
        } else {
            Err(AuthError::NotAuthenticated.into())
        }
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        self.invalidate_market_cache().await;
    }

    pub(crate) async fn invalidate_market_cache(&self) {
        let mut cache = self.market_cache.write().await;
        *cache = None;
        self.market_cache_generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Clone for GdMatkaClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            credentials: self.credentials.clone(),
            market_cache: self.market_cache.clone(),
            market_cache_generation: self.market_cache_generation.clone(),
            market_cache_ttl: self.market_cache_ttl,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct GdMatkaClientBuilder {
    base_url: String,
    token: Option<String>,
    market_cache_ttl: Duration,
    read_retry: RetryPolicy,
}

impl Default for GdMatkaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            token: None,
            market_cache_ttl: Duration::from_secs(60),
            read_retry: RetryPolicy::Idempotent,
        }
    }
}

impl GdMatkaClientBuilder {
    /// Defaults overridden by `GDMATKA_API_URL` and `GDMATKA_ADMIN_TOKEN`
    /// when they are set and non-empty.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Some(url) = read_env(crate::network::API_URL_ENV) {
            builder.base_url = url;
        }
        builder.token = read_env(crate::network::ADMIN_TOKEN_ENV);
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Admin bearer token, with or without the `Bearer ` prefix.
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn market_cache_ttl(mut self, ttl: Duration) -> Self {
        self.market_cache_ttl = ttl;
        self
    }

    /// Retry policy for GET endpoints. Mutations are never retried.
    pub fn read_retry(mut self, policy: RetryPolicy) -> Self {
        self.read_retry = policy;
        self
    }

    pub fn build(self) -> Result<GdMatkaClient, SdkError> {
        let token = self.token.as_deref().map(AdminToken::new).transpose()?;
        let credentials = token.as_ref().map(|_| AuthCredentials { since: Utc::now() });

        Ok(GdMatkaClient {
            http: GdMatkaHttp::new(&self.base_url, self.read_retry)?.with_auth_token(token),
            credentials: Arc::new(RwLock::new(credentials)),
            market_cache: Arc::new(RwLock::new(None)),
            market_cache_generation: Arc::new(AtomicU64::new(0)),
            market_cache_ttl: self.market_cache_ttl,
        })
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::MarketForm;
    use crate::shared::UserId;

    fn offline_client(token: Option<&str>) -> GdMatkaClient {
        // Port 9 (discard) on loopback; nothing here should ever connect.
        let mut builder = GdMatkaClient::builder()
            .base_url("http://127.0.0.1:9/")
            .read_retry(RetryPolicy::None);
        if let Some(token) = token {
            builder = builder.token(token);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let client = GdMatkaClient::builder().build().unwrap();
        assert_eq!(client.base_url(), crate::network::DEFAULT_API_URL);
        assert_eq!(client.market_cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_builder_rejects_empty_token() {
        let result = GdMatkaClient::builder().token("Bearer  ").build();
        assert!(matches!(result, Err(SdkError::Auth(AuthError::EmptyToken))));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(offline_client(None).base_url(), "http://127.0.0.1:9");
    }

    #[test]
    fn test_mutation_without_token_fails_before_network() {
        let client = offline_client(None);
        tokio_test::block_on(async {
            let err = client
                .markets()
                .create(&MarketForm::new("KALYAN", "10:00", "12:00"))
                .await
                .unwrap_err();
            assert!(matches!(err, SdkError::Auth(AuthError::NotAuthenticated)));

            let err = client
                .users()
                .add_funds(&UserId::from("u1"), "100")
                .await
                .unwrap_err();
            assert!(matches!(err, SdkError::Auth(AuthError::NotAuthenticated)));
        });
    }

    #[test]
    fn test_validation_runs_before_auth_check() {
        let client = offline_client(None);
        tokio_test::block_on(async {
            let err = client
                .users()
                .add_funds(&UserId::from("u1"), "-5")
                .await
                .unwrap_err();
            assert!(matches!(err, SdkError::Validation(_)));
        });
    }

    #[test]
    fn test_token_from_builder_is_live() {
        let client = offline_client(Some("Bearer abc"));
        tokio_test::block_on(async {
            assert!(client.ensure_authenticated().await.is_ok());
            assert!(client.auth().is_authenticated().await);
            assert!(client.auth().credentials().await.is_some());
        });
    }
}
