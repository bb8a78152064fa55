//! User profiles and the user-detail aggregate.

#[cfg(feature = "http")]
pub mod client;
pub mod detail;
pub mod wire;

use crate::shared::fmt::format_inr;
use crate::shared::time::format_ist_opt;
use crate::shared::{ActiveStatus, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub use detail::UserDetail;
use wire::UserResponse;

/// User accounts share the active/inactive flag with markets.
pub type UserStatus = ActiveStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub balance: Decimal,
    pub status: UserStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "-"
        } else {
            &self.name
        }
    }

    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("-")
    }

    /// `₹1,50,000`
    pub fn display_balance(&self) -> String {
        format_inr(self.balance)
    }

    pub fn display_joined(&self) -> String {
        format_ist_opt(self.created_at)
    }
}

impl From<UserResponse> for User {
    fn from(source: UserResponse) -> Self {
        User {
            id: source.object_id.or(source.id).unwrap_or_default(),
            name: source.name.unwrap_or_default(),
            phone: source.phone.unwrap_or_default(),
            email: source.email.filter(|e| !e.trim().is_empty()),
            balance: source.balance,
            status: source
                .status
                .as_ref()
                .and_then(ActiveStatus::from_wire)
                .unwrap_or_default(),
            created_at: source.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_response() {
        let raw: UserResponse = serde_json::from_value(json!({
            "id": 42,
            "name": "Asha",
            "phone": "9000000000",
            "email": "",
            "balance": 150000,
            "status": "active"
        }))
        .unwrap();
        let user = User::from(raw);
        assert_eq!(user.id.as_str(), "42");
        assert!(user.is_active());
        assert_eq!(user.display_email(), "-");
        assert_eq!(user.display_joined(), "-");
        assert!(user.display_balance().starts_with("₹1,50,000"));
    }

    #[test]
    fn test_unknown_status_is_inactive() {
        let raw: UserResponse =
            serde_json::from_value(json!({"_id": "u", "status": "suspended?"})).unwrap();
        let user = User::from(raw);
        assert_eq!(user.status, UserStatus::Inactive);
        assert_eq!(user.display_name(), "-");
    }
}
