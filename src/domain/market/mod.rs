//! Market domain: games with open/close times and weekly schedules.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod form;
pub mod schedule;
pub mod state;
pub mod wire;

use crate::shared::time::{format_clock_12h, to_ist, within_window};
use crate::shared::{ActiveStatus, MarketId};
use chrono::{DateTime, Datelike, NaiveTime, Utc};
use std::fmt;

pub use form::{MarketForm, MarketFormError};
pub use schedule::WeekSchedule;
pub use state::{MarketBoard, MarketFilter, StatusFilter};

/// Market status is the shared active/inactive flag.
pub type MarketStatus = ActiveStatus;

// ─── Market ──────────────────────────────────────────────────────────────────

/// A validated market.
#[derive(Debug, Clone, PartialEq)]
pub struct Market {
    pub id: MarketId,
    pub name: String,
    /// IST wall clock.
    pub open_time: NaiveTime,
    /// IST wall clock. Earlier than `open_time` for sessions that run past midnight.
    pub close_time: NaiveTime,
    pub schedule: WeekSchedule,
    pub status: MarketStatus,
    pub result: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Market {
    /// Whether the market accepts bids at `now`.
    ///
    /// The market must be active, and `now` (in IST) must fall inside the
    /// `[open, close)` window of a day the market is open. For a session that
    /// crosses midnight, the hours after midnight belong to the previous day.
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        if !self.status.is_active() {
            return false;
        }
        let local = to_ist(now);
        let time = local.time();
        if !within_window(self.open_time, self.close_time, time) {
            return false;
        }

        let session_day = if self.open_time > self.close_time && time < self.close_time {
            local.weekday().pred()
        } else {
            local.weekday()
        };
        self.schedule.is_open(session_day)
    }

    /// `03:45 PM - 05:45 PM`
    pub fn timing(&self) -> String {
        format!(
            "{} - {}",
            format_clock_12h(self.open_time),
            format_clock_12h(self.close_time)
        )
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingId,
    MissingName,
    InvalidOpenTime(String),
    InvalidCloseTime(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Market validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingId => write!(f, "Missing id"),
            ValidationError::MissingName => write!(f, "Missing name"),
            ValidationError::InvalidOpenTime(raw) => write!(f, "Invalid open time: {raw:?}"),
            ValidationError::InvalidCloseTime(raw) => write!(f, "Invalid close time: {raw:?}"),
        }
    }
}

impl std::error::Error for ValidationError {}
