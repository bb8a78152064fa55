//! Wire types for minimum limits and app settings.

use crate::shared::serde_util;
use crate::shared::LimitId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw row from `GET /api/minimumlimits`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LimitRowResponse {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<LimitId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LimitId>,
    #[serde(default, rename = "type", alias = "limit_type", alias = "name")]
    pub limit_type: Option<String>,
    #[serde(
        default,
        alias = "min_amount",
        alias = "minimum",
        deserialize_with = "serde_util::lenient_decimal::deserialize"
    )]
    pub amount: Decimal,
}

/// Body for `PUT /api/minimumlimits/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LimitUpdateRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// `GET`/`PUT /api/app-settings`.
///
/// Only the withdrawal window is edited here. Every other key is carried in
/// `extra` so an update writes back exactly what was read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppSettingsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdraw_open_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdraw_close_time: Option<String>,
    /// Boolean, `1`/`0`, or `"enabled"`/`"disabled"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdraw_enabled: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Older backends name the toggle `withdrawal_enabled`. It stays in `extra`
/// so the update goes back under the same key.
const WITHDRAWAL_ENABLED_KEY: &str = "withdrawal_enabled";

impl AppSettingsResponse {
    pub fn enabled_flag(&self) -> Option<&serde_json::Value> {
        self.withdraw_enabled
            .as_ref()
            .or_else(|| self.extra.get(WITHDRAWAL_ENABLED_KEY))
    }

    /// Writes `enabled` under whichever key the payload already uses.
    pub fn set_enabled_flag(&mut self, enabled: bool) {
        let value = serde_json::Value::Bool(enabled);
        if self.withdraw_enabled.is_none() && self.extra.contains_key(WITHDRAWAL_ENABLED_KEY) {
            self.extra.insert(WITHDRAWAL_ENABLED_KEY.to_string(), value);
        } else {
            self.withdraw_enabled = Some(value);
        }
    }
}
