//! Wire types for the notice board.

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /api/notices`. `content` is base64 of the UTF-8 markdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NoticeResponse {
    #[serde(default, alias = "notice", alias = "markdown")]
    pub content: Option<String>,
    #[serde(
        default,
        alias = "updatedAt",
        deserialize_with = "serde_util::flexible_timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `POST /api/notices`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoticeRequest {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::serde_util::Single;
    use serde_json::json;

    #[test]
    fn test_notice_bare_and_wrapped() {
        let bare: Single<NoticeResponse> =
            serde_json::from_value(json!({"content": "IyBIb2xpZGF5"})).unwrap();
        assert_eq!(bare.into_inner().content.as_deref(), Some("IyBIb2xpZGF5"));

        let wrapped: Single<NoticeResponse> = serde_json::from_value(json!({
            "success": true,
            "data": {"content": "IyBIb2xpZGF5", "updatedAt": "2026-01-05T10:00:00Z"}
        }))
        .unwrap();
        let notice = wrapped.into_inner();
        assert_eq!(notice.content.as_deref(), Some("IyBIb2xpZGF5"));
        assert!(notice.updated_at.is_some());
    }
}
