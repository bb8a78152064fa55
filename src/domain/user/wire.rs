//! Wire types for user profiles and admin user actions.

use crate::shared::serde_util;
use crate::shared::{ActiveStatus, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw profile from `GET /api/user/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, alias = "username", alias = "full_name")]
    pub name: Option<String>,
    #[serde(
        default,
        alias = "mobile",
        alias = "phone_number",
        deserialize_with = "serde_util::optional_string_or_number"
    )]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(
        default,
        alias = "wallet",
        alias = "wallet_balance",
        deserialize_with = "serde_util::lenient_decimal::deserialize"
    )]
    pub balance: Decimal,
    /// `"active"`/`"inactive"`, a boolean, or `1`/`0`.
    #[serde(default, alias = "is_active")]
    pub status: Option<serde_json::Value>,
    #[serde(
        default,
        alias = "createdAt",
        deserialize_with = "serde_util::flexible_timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST /api/user/:id/addfunds` and `/withdrawfunds`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FundRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// `Some("bonus")` for bonus credits.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Body for `POST /api/changestatus`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeStatusRequest {
    pub user_id: UserId,
    pub status: ActiveStatus,
}

/// Body for `POST /api/deleteuser`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteUserRequest {
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_user_response_lenient() {
        let user: UserResponse = serde_json::from_value(json!({
            "_id": "u1",
            "username": "Ravi",
            "mobile": 9876543210u64,
            "wallet": "1500.50",
            "status": true,
            "created_at": "2026-01-05 10:00:00"
        }))
        .unwrap();
        assert_eq!(user.object_id.unwrap().as_str(), "u1");
        assert_eq!(user.phone.as_deref(), Some("9876543210"));
        assert_eq!(user.balance, Decimal::new(150050, 2));
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_user_response_camel_case_created_at() {
        let user: UserResponse = serde_json::from_value(json!({
            "_id": "u2",
            "createdAt": "2026-01-05T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(
            user.created_at,
            Some(Utc.with_ymd_and_hms(2026, 1, 5, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_fund_request_bodies() {
        let plain = FundRequest {
            amount: Decimal::from(500),
            kind: None,
        };
        assert_eq!(serde_json::to_value(&plain).unwrap(), json!({"amount": 500.0}));

        let bonus = FundRequest {
            amount: Decimal::from(50),
            kind: Some("bonus".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&bonus).unwrap(),
            json!({"amount": 50.0, "type": "bonus"})
        );
    }

    #[test]
    fn test_status_request_body() {
        let req = ChangeStatusRequest {
            user_id: UserId::from("u1"),
            status: ActiveStatus::Inactive,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"user_id": "u1", "status": "inactive"})
        );
    }
}
