//! Conversion: MarketResponse → Market (TryFrom + validation).

use super::schedule::WeekSchedule;
use super::wire::MarketResponse;
use super::{Market, MarketStatus, ValidationError};
use crate::shared::time::parse_clock;
use crate::shared::MarketId;
use chrono::NaiveTime;

impl TryFrom<MarketResponse> for Market {
    type Error = ValidationError;

    fn try_from(source: MarketResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let id = source
            .object_id
            .or(source.id)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| {
                errors.push(ValidationError::MissingId);
                MarketId::default()
            });

        let name = source
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| {
                errors.push(ValidationError::MissingName);
                String::new()
            });

        let raw_open = source.open_time.unwrap_or_default();
        let open_time = parse_clock(&raw_open).unwrap_or_else(|| {
            errors.push(ValidationError::InvalidOpenTime(raw_open.clone()));
            NaiveTime::MIN
        });

        let raw_close = source.close_time.unwrap_or_default();
        let close_time = parse_clock(&raw_close).unwrap_or_else(|| {
            errors.push(ValidationError::InvalidCloseTime(raw_close.clone()));
            NaiveTime::MIN
        });

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(
                if id.is_empty() { name } else { id.to_string() },
                errors,
            ));
        }

        // An unknown status is shown as inactive rather than dropping the market.
        let status = source
            .status
            .as_ref()
            .and_then(MarketStatus::from_wire)
            .unwrap_or_default();

        let schedule = source
            .market_close_days
            .as_ref()
            .map(WeekSchedule::from_close_days_value)
            .unwrap_or_default();

        Ok(Market {
            id,
            name,
            open_time,
            close_time,
            schedule,
            status,
            result: source.result.filter(|r| !r.trim().is_empty()),
            created_at: source.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use serde_json::json;

    fn response() -> MarketResponse {
        serde_json::from_value(json!({
            "_id": "abc123",
            "name": " KALYAN ",
            "open_time": "15:45",
            "close_time": "05:45 PM",
            "market_close_days": "Saturday,Sunday",
            "status": "active",
            "result": "123-6"
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_market_converts() {
        let m = Market::try_from(response()).unwrap();
        assert_eq!(m.id.as_str(), "abc123");
        assert_eq!(m.name, "KALYAN");
        assert_eq!(m.open_time, NaiveTime::from_hms_opt(15, 45, 0).unwrap());
        assert_eq!(m.close_time, NaiveTime::from_hms_opt(17, 45, 0).unwrap());
        assert_eq!(m.schedule.closed_days(), vec![Weekday::Sat, Weekday::Sun]);
        assert_eq!(m.status, MarketStatus::Active);
        assert_eq!(m.result.as_deref(), Some("123-6"));
    }

    #[test]
    fn test_unknown_status_defaults_to_inactive() {
        let mut r = response();
        r.status = Some(json!("paused"));
        assert_eq!(Market::try_from(r).unwrap().status, MarketStatus::Inactive);
    }

    #[test]
    fn test_collects_all_errors() {
        let r = MarketResponse {
            object_id: None,
            id: None,
            name: Some("  ".to_string()),
            open_time: Some("noon".to_string()),
            close_time: None,
            ..Default::default()
        };
        match Market::try_from(r) {
            Err(ValidationError::Multiple(_, errors)) => assert_eq!(errors.len(), 4),
            other => panic!("expected Multiple, got {other:?}"),
        }
    }
}
