//! Wire types for market (game) requests and responses.

use crate::shared::serde_util;
use crate::shared::{ActiveStatus, MarketId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw market record from `GET /api/market`.
///
/// Every field is optional on the wire; [`super::Market`] is the validated form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketResponse {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<MarketId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MarketId>,
    #[serde(default, alias = "market_name", alias = "game_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub open_time: Option<String>,
    #[serde(default)]
    pub close_time: Option<String>,
    /// Comma-separated closed weekdays, occasionally an array.
    #[serde(default)]
    pub market_close_days: Option<serde_json::Value>,
    /// `"active"`/`"inactive"`, a boolean, or `1`/`0`.
    #[serde(default, alias = "is_active")]
    pub status: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(
        default,
        alias = "createdAt",
        deserialize_with = "serde_util::flexible_timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST /api/market` and `PUT /api/market/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketRequest {
    pub name: String,
    /// `HH:MM`, IST.
    pub open_time: String,
    /// `HH:MM`, IST.
    pub close_time: String,
    pub market_close_days: String,
    pub status: ActiveStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_market_response_mongo_shape() {
        let json = r#"{
            "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "name": "KALYAN",
            "open_time": "15:45",
            "close_time": "17:45",
            "market_close_days": "Sunday",
            "status": "active",
            "createdAt": "2024-01-15T10:30:00Z"
        }"#;
        let m: MarketResponse = serde_json::from_str(json).unwrap();
        assert_eq!(m.object_id.unwrap().as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");
        assert!(m.id.is_none());
        assert_eq!(m.name.as_deref(), Some("KALYAN"));
        assert_eq!(
            m.created_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_market_response_numeric_id_and_bool_status() {
        let json = r#"{"id": 7, "game_name": "MILAN DAY", "is_active": false}"#;
        let m: MarketResponse = serde_json::from_str(json).unwrap();
        assert_eq!(m.id.unwrap().as_str(), "7");
        assert_eq!(m.name.as_deref(), Some("MILAN DAY"));
        assert_eq!(m.status, Some(serde_json::Value::Bool(false)));
        assert!(m.open_time.is_none());
    }

    #[test]
    fn test_market_request_serialize() {
        let req = MarketRequest {
            name: "SRIDEVI".to_string(),
            open_time: "11:35".to_string(),
            close_time: "12:35".to_string(),
            market_close_days: "Sunday".to_string(),
            status: ActiveStatus::Active,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["market_close_days"], "Sunday");
        assert_eq!(v["status"], "active");
    }
}
