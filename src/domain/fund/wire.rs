//! Wire types for fund history.

use crate::shared::serde_util;
use crate::shared::FundEntryId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw entry from `GET /api/user/:id/funds`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FundEntryResponse {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<FundEntryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FundEntryId>,
    #[serde(default, deserialize_with = "serde_util::lenient_decimal::deserialize")]
    pub amount: Decimal,
    /// `credit`, `debit`, `deposit`, `withdraw`, `bonus`, ...
    #[serde(default, rename = "type", alias = "transaction_type")]
    pub entry_type: Option<String>,
    /// `admin` or `user`.
    #[serde(default, alias = "added_by")]
    pub source: Option<String>,
    /// `pending`, `approved`, `rejected`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "remarks", alias = "description")]
    pub remark: Option<String>,
    #[serde(
        default,
        alias = "createdAt",
        deserialize_with = "serde_util::flexible_timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_fund_entry_reads_camel_case_timestamp() {
        let entry: FundEntryResponse = serde_json::from_value(json!({
            "_id": "f1",
            "amount": 100,
            "type": "credit",
            "createdAt": "2026-01-05T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(
            entry.created_at,
            Some(Utc.with_ymd_and_hms(2026, 1, 5, 10, 0, 0).unwrap())
        );
    }
}
