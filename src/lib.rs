//! # GD Matka Admin SDK
//!
//! A Rust SDK for the GD Matka admin backend: markets (games), minimum limits,
//! the withdrawal window, the notice board, and user accounts.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, formatting, pagination, domain models (always available)
//! 2. **Auth** — The admin bearer token and session view
//! 3. **HTTP API** — `GdMatkaHttp` with per-endpoint retry policies
//! 4. **High-Level Client** — `GdMatkaClient` with nested sub-clients and caching
//!
//! The backend is the only source of truth. Everything held client-side is a
//! disposable cache that mutations invalidate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gdmatka_admin::prelude::*;
//!
//! let client = GdMatkaClient::builder()
//!     .base_url("https://backend.gdmatka.site")
//!     .token(&admin_token)
//!     .build()?;
//!
//! let board = MarketBoard::new(client.markets().list().await?);
//! let detail = client.users().detail(&UserId::from("64f0c1")).await?;
//! println!("{}", detail.fund_summary().total_credits());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: the admin token and credentials.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `GdMatkaClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{
        ActiveStatus, BetId, FundEntryId, LimitId, MarketId, PageRow, PageWindow, Paginator,
        UserId,
    };

    // Domain types — market
    pub use crate::domain::market::{
        Market, MarketBoard, MarketFilter, MarketForm, MarketFormError, MarketStatus,
        StatusFilter, WeekSchedule,
    };

    // Domain types — limits + settings
    pub use crate::domain::limits::{
        AppSettings, LimitKind, LimitRow, WithdrawalWindow, WithdrawalWindowForm,
    };

    // Domain types — notice
    pub use crate::domain::notice::{decode_content, encode_content, Notice};

    // Domain types — user, fund, bid
    pub use crate::domain::bid::{BetEdit, BetEditError, Bid, BidStatus, Winning};
    pub use crate::domain::fund::{
        FundCategory, FundDirection, FundEntry, FundHistory, FundSource, FundStatus, FundSummary,
    };
    pub use crate::domain::user::{User, UserDetail, UserStatus};

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth
    pub use crate::auth::AuthCredentials;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, BetsClient, GdMatkaClient, GdMatkaClientBuilder, LimitsClient,
        MarketsClient, NoticesClient, SettingsClient, UsersClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
