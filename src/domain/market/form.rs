//! Editable market form, used for both create and edit.

use super::schedule::WeekSchedule;
use super::wire::MarketRequest;
use super::{Market, MarketStatus};
use crate::error::SdkError;
use crate::shared::time::{format_clock, parse_clock};
use chrono::Weekday;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketFormError {
    #[error("Market name is required")]
    EmptyName,

    #[error("Invalid open time: {0:?}")]
    InvalidOpenTime(String),

    #[error("Invalid close time: {0:?}")]
    InvalidCloseTime(String),

    #[error("Open and close time cannot be the same")]
    EmptyWindow,
}

impl From<MarketFormError> for SdkError {
    fn from(err: MarketFormError) -> Self {
        SdkError::Validation(err.to_string())
    }
}

/// Form state. Times are kept as entered and parsed on [`MarketForm::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct MarketForm {
    pub name: String,
    pub open_time: String,
    pub close_time: String,
    pub schedule: WeekSchedule,
    pub status: MarketStatus,
}

impl Default for MarketForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            open_time: String::new(),
            close_time: String::new(),
            schedule: WeekSchedule::all_open(),
            status: MarketStatus::Active,
        }
    }
}

impl From<&Market> for MarketForm {
    fn from(market: &Market) -> Self {
        Self {
            name: market.name.clone(),
            open_time: format_clock(market.open_time),
            close_time: format_clock(market.close_time),
            schedule: market.schedule,
            status: market.status,
        }
    }
}

impl MarketForm {
    pub fn new(name: &str, open_time: &str, close_time: &str) -> Self {
        Self {
            name: name.to_string(),
            open_time: open_time.to_string(),
            close_time: close_time.to_string(),
            ..Self::default()
        }
    }

    /// Flip one weekday between open and closed; returns the new open state.
    pub fn toggle_day(&mut self, day: Weekday) -> bool {
        self.schedule.toggle(day)
    }

    /// Build the request body, normalising times to `HH:MM`.
    pub fn validate(&self) -> Result<MarketRequest, MarketFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(MarketFormError::EmptyName);
        }
        let open = parse_clock(&self.open_time)
            .ok_or_else(|| MarketFormError::InvalidOpenTime(self.open_time.clone()))?;
        let close = parse_clock(&self.close_time)
            .ok_or_else(|| MarketFormError::InvalidCloseTime(self.close_time.clone()))?;
        if open == close {
            return Err(MarketFormError::EmptyWindow);
        }

        Ok(MarketRequest {
            name: name.to_string(),
            open_time: format_clock(open),
            close_time: format_clock(close),
            market_close_days: self.schedule.close_days_string(),
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::MarketId;
    use chrono::NaiveTime;

    #[test]
    fn test_toggled_days_reach_request() {
        let mut form = MarketForm::new("TIME BAZAR", "1:00 PM", "14:00");
        assert!(!form.toggle_day(Weekday::Sun));
        assert!(!form.toggle_day(Weekday::Sat));
        let req = form.validate().unwrap();
        assert_eq!(req.market_close_days, "Saturday,Sunday");
        assert_eq!(req.open_time, "13:00");
        assert_eq!(req.close_time, "14:00");
        assert_eq!(req.status, MarketStatus::Active);

        assert!(form.toggle_day(Weekday::Sat));
        assert_eq!(form.validate().unwrap().market_close_days, "Sunday");
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            MarketForm::new("  ", "10:00", "11:00").validate(),
            Err(MarketFormError::EmptyName)
        );
        assert_eq!(
            MarketForm::new("A", "ten", "11:00").validate(),
            Err(MarketFormError::InvalidOpenTime("ten".to_string()))
        );
        assert_eq!(
            MarketForm::new("A", "10:00", "").validate(),
            Err(MarketFormError::InvalidCloseTime(String::new()))
        );
        assert_eq!(
            MarketForm::new("A", "10:00", "10:00 AM").validate(),
            Err(MarketFormError::EmptyWindow)
        );
    }

    #[test]
    fn test_edit_form_seeds_from_market() {
        let mut schedule = WeekSchedule::all_open();
        schedule.toggle(Weekday::Sun);
        let market = Market {
            id: MarketId::from("m1"),
            name: "MILAN NIGHT".to_string(),
            open_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            schedule,
            status: MarketStatus::Inactive,
            result: None,
            created_at: None,
        };
        let form = MarketForm::from(&market);
        assert_eq!(form.open_time, "21:00");
        let req = form.validate().unwrap();
        assert_eq!(req.market_close_days, "Sunday");
        assert_eq!(req.status, MarketStatus::Inactive);
    }
}
