//! Low-level HTTP client, `GdMatkaHttp`.
//!
//! One method per backend endpoint, returning wire types. Conversion to domain
//! types happens in the sub-clients, and `GdMatkaClient` wraps this.

use crate::auth::AdminToken;
use crate::domain::bid::wire::{BetUpdateRequest, BidResponse, WinningResponse};
use crate::domain::fund::wire::FundEntryResponse;
use crate::domain::limits::wire::{AppSettingsResponse, LimitRowResponse, LimitUpdateRequest};
use crate::domain::market::wire::{MarketRequest, MarketResponse};
use crate::domain::notice::wire::{NoticeRequest, NoticeResponse};
use crate::domain::user::wire::{ChangeStatusRequest, DeleteUserRequest, FundRequest, UserResponse};
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::shared::serde_util::{Listing, Single};
use crate::shared::{BetId, LimitId, MarketId, UserId};

use async_lock::RwLock;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the GD Matka REST API.
pub struct GdMatkaHttp {
    base_url: String,
    client: Client,
    /// Retry policy applied to GET endpoints.
    read_retry: RetryPolicy,
    /// Admin token. NEVER exposed publicly.
    auth_token: Arc<RwLock<Option<AdminToken>>>,
}

impl GdMatkaHttp {
    pub fn new(base_url: &str, read_retry: RetryPolicy) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            read_retry,
            auth_token: Arc::new(RwLock::new(None)),
        })
    }

    /// Seed the token at construction, before the client is shared.
    pub(crate) fn with_auth_token(self, token: Option<AdminToken>) -> Self {
        Self {
            auth_token: Arc::new(RwLock::new(token)),
            ..self
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn set_auth_token(&self, token: Option<AdminToken>) {
        *self.auth_token.write().await = token;
    }

    pub(crate) async fn clear_auth_token(&self) {
        *self.auth_token.write().await = None;
    }

    pub(crate) async fn has_auth_token(&self) -> bool {
        self.auth_token.read().await.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    fn segment(id: &str) -> String {
        urlencoding::encode(id).into_owned()
    }

    // ── Markets ──────────────────────────────────────────────────────────

    pub async fn get_markets(&self) -> Result<Vec<MarketResponse>, HttpError> {
        let resp: Listing<MarketResponse> = self.get(&self.url("market")).await?;
        Ok(resp.into_vec())
    }

    pub async fn get_market(&self, id: &MarketId) -> Result<MarketResponse, HttpError> {
        let url = self.url(&format!("market/{}", Self::segment(id.as_str())));
        let resp: Single<MarketResponse> = self.get(&url).await?;
        Ok(resp.into_inner())
    }

    pub async fn create_market(
        &self,
        request: &MarketRequest,
    ) -> Result<serde_json::Value, HttpError> {
        self.send(Method::POST, &self.url("market"), Some(request))
            .await
    }

    pub async fn update_market(
        &self,
        id: &MarketId,
        request: &MarketRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let url = self.url(&format!("market/{}", Self::segment(id.as_str())));
        self.send(Method::PUT, &url, Some(request)).await
    }

    pub async fn delete_market(&self, id: &MarketId) -> Result<serde_json::Value, HttpError> {
        let url = self.url(&format!("market/{}", Self::segment(id.as_str())));
        self.send(Method::DELETE, &url, None::<&()>).await
    }

    // ── Minimum limits ───────────────────────────────────────────────────

    pub async fn get_minimum_limits(&self) -> Result<Vec<LimitRowResponse>, HttpError> {
        let resp: Listing<LimitRowResponse> = self.get(&self.url("minimumlimits")).await?;
        Ok(resp.into_vec())
    }

    pub async fn update_minimum_limit(
        &self,
        id: &LimitId,
        request: &LimitUpdateRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let url = self.url(&format!("minimumlimits/{}", Self::segment(id.as_str())));
        self.send(Method::PUT, &url, Some(request)).await
    }

    // ── App settings ─────────────────────────────────────────────────────

    pub async fn get_app_settings(&self) -> Result<AppSettingsResponse, HttpError> {
        let resp: Single<AppSettingsResponse> = self.get(&self.url("app-settings")).await?;
        Ok(resp.into_inner())
    }

    pub async fn update_app_settings(
        &self,
        request: &AppSettingsResponse,
    ) -> Result<serde_json::Value, HttpError> {
        self.send(Method::PUT, &self.url("app-settings"), Some(request))
            .await
    }

    // ── Notices ──────────────────────────────────────────────────────────

    pub async fn get_notice(&self) -> Result<NoticeResponse, HttpError> {
        let resp: Single<NoticeResponse> = self.get(&self.url("notices")).await?;
        Ok(resp.into_inner())
    }

    pub async fn post_notice(&self, request: &NoticeRequest) -> Result<serde_json::Value, HttpError> {
        self.send(Method::POST, &self.url("notices"), Some(request))
            .await
    }

    // ── Users ────────────────────────────────────────────────────────────

    pub async fn get_user(&self, id: &UserId) -> Result<UserResponse, HttpError> {
        let url = self.url(&format!("user/{}", Self::segment(id.as_str())));
        let resp: Single<UserResponse> = self.get(&url).await?;
        Ok(resp.into_inner())
    }

    pub async fn get_user_funds(&self, id: &UserId) -> Result<Vec<FundEntryResponse>, HttpError> {
        let url = self.url(&format!("user/{}/funds", Self::segment(id.as_str())));
        let resp: Listing<FundEntryResponse> = self.get(&url).await?;
        Ok(resp.into_vec())
    }

    pub async fn get_user_bids(&self, id: &UserId) -> Result<Vec<BidResponse>, HttpError> {
        let url = self.url(&format!("user/{}/bids", Self::segment(id.as_str())));
        let resp: Listing<BidResponse> = self.get(&url).await?;
        Ok(resp.into_vec())
    }

    pub async fn get_user_winnings(&self, id: &UserId) -> Result<Vec<WinningResponse>, HttpError> {
        let url = self.url(&format!("user/{}/winnings", Self::segment(id.as_str())));
        let resp: Listing<WinningResponse> = self.get(&url).await?;
        Ok(resp.into_vec())
    }

    pub async fn add_funds(
        &self,
        id: &UserId,
        request: &FundRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let url = self.url(&format!("user/{}/addfunds", Self::segment(id.as_str())));
        self.send(Method::POST, &url, Some(request)).await
    }

    pub async fn withdraw_funds(
        &self,
        id: &UserId,
        request: &FundRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let url = self.url(&format!("user/{}/withdrawfunds", Self::segment(id.as_str())));
        self.send(Method::POST, &url, Some(request)).await
    }

    pub async fn change_user_status(
        &self,
        request: &ChangeStatusRequest,
    ) -> Result<serde_json::Value, HttpError> {
        self.send(Method::POST, &self.url("changestatus"), Some(request))
            .await
    }

    pub async fn delete_user(
        &self,
        request: &DeleteUserRequest,
    ) -> Result<serde_json::Value, HttpError> {
        self.send(Method::POST, &self.url("deleteuser"), Some(request))
            .await
    }

    // ── Bets ─────────────────────────────────────────────────────────────

    pub async fn update_bet(
        &self,
        id: &BetId,
        request: &BetUpdateRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let url = self.url(&format!("bets/{}", Self::segment(id.as_str())));
        self.send(Method::PUT, &url, Some(request)).await
    }

    pub async fn delete_bet(&self, id: &BetId) -> Result<serde_json::Value, HttpError> {
        let url = self.url(&format!("bets/{}", Self::segment(id.as_str())));
        self.send(Method::DELETE, &url, None::<&()>).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.request_with_retry(Method::GET, url, None::<&()>, &self.read_retry)
            .await
    }

    /// Mutations: single attempt, never retried.
    async fn send<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        self.request_with_retry(method, url, body, &RetryPolicy::None)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        retry: &RetryPolicy,
    ) -> Result<T, HttpError> {
        let Some(config) = retry.config() else {
            return self.do_request(&method, url, body).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => config.is_retryable_status(*status),
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Reqwest(re) => {
                            #[cfg(not(target_arch = "wasm32"))]
                            let retryable = re.is_connect() || re.is_timeout();
                            #[cfg(target_arch = "wasm32")]
                            let retryable = re.is_timeout();
                            retryable
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(token) = self.auth_token.read().await.as_ref() {
            req = req.bearer_auth(token.expose());
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = resp.text().await?;

        if status.is_success() {
            return parse_body(&body_text);
        }

        tracing::warn!(status = status_code, %method, url, "Backend request failed");

        match status_code {
            401 | 403 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

/// Parse a success body. Empty bodies (common on DELETE) parse as JSON `null`.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, HttpError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| HttpError::InvalidResponse(e.to_string()))
}

impl Clone for GdMatkaHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            read_retry: self.read_retry.clone(),
            auth_token: self.auth_token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_accepts_empty() {
        let v: serde_json::Value = parse_body("").unwrap();
        assert!(v.is_null());
        let v: serde_json::Value = parse_body("  \n").unwrap();
        assert!(v.is_null());
    }

    #[test]
    fn test_parse_body_reports_garbage() {
        let err = parse_body::<serde_json::Value>("<html>").unwrap_err();
        assert!(matches!(err, HttpError::InvalidResponse(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let http = GdMatkaHttp::new("https://backend.example/", RetryPolicy::None).unwrap();
        assert_eq!(http.base_url(), "https://backend.example");
        assert_eq!(http.url("market"), "https://backend.example/api/market");
    }

    #[test]
    fn test_ids_are_path_encoded() {
        assert_eq!(GdMatkaHttp::segment("a/b c"), "a%2Fb%20c");
    }
}
