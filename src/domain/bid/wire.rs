//! Wire types for bid and winning history, and bet edits.

use crate::shared::serde_util;
use crate::shared::BetId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw row from `GET /api/user/:id/bids`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BidResponse {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<BetId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BetId>,
    #[serde(default, alias = "market", alias = "game_name")]
    pub market_name: Option<String>,
    #[serde(default, alias = "bid_type", alias = "game")]
    pub game_type: Option<String>,
    /// `open` or `close`, absent for full-day games.
    #[serde(default)]
    pub session: Option<String>,
    #[serde(
        default,
        alias = "digit",
        alias = "number",
        deserialize_with = "serde_util::optional_string_or_number"
    )]
    pub digits: Option<String>,
    #[serde(
        default,
        alias = "amount",
        deserialize_with = "serde_util::lenient_decimal::deserialize"
    )]
    pub points: Decimal,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(
        default,
        alias = "createdAt",
        deserialize_with = "serde_util::flexible_timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// Raw row from `GET /api/user/:id/winnings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WinningResponse {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<BetId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BetId>,
    #[serde(default, alias = "market", alias = "game_name")]
    pub market_name: Option<String>,
    #[serde(default, alias = "bid_type", alias = "game")]
    pub game_type: Option<String>,
    #[serde(
        default,
        alias = "digit",
        alias = "number",
        deserialize_with = "serde_util::optional_string_or_number"
    )]
    pub digits: Option<String>,
    #[serde(
        default,
        alias = "amount",
        deserialize_with = "serde_util::lenient_decimal::deserialize"
    )]
    pub points: Decimal,
    #[serde(
        default,
        alias = "win_amount",
        alias = "winning",
        deserialize_with = "serde_util::lenient_decimal::deserialize"
    )]
    pub winning_amount: Decimal,
    #[serde(
        default,
        alias = "createdAt",
        deserialize_with = "serde_util::flexible_timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `PUT /api/bets/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BetUpdateRequest {
    pub digits: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub points: Decimal,
}
