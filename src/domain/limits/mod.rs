//! Limits domain: per-type minimum amounts and the withdrawal window.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::error::SdkError;
use crate::shared::time::{format_clock, parse_clock, to_ist, within_window};
use crate::shared::{ActiveStatus, LimitId};
use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use wire::{AppSettingsResponse, LimitRowResponse};

// ─── Minimum limits ──────────────────────────────────────────────────────────

/// What a minimum applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LimitKind {
    Bet,
    Deposit,
    Withdraw,
    /// Any type this SDK does not know, kept verbatim.
    Other(String),
}

impl LimitKind {
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "bet" | "bid" | "minimum_bet" => LimitKind::Bet,
            "deposit" | "minimum_deposit" => LimitKind::Deposit,
            "withdraw" | "withdrawal" | "minimum_withdraw" => LimitKind::Withdraw,
            _ => LimitKind::Other(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            LimitKind::Bet => "Minimum Bet",
            LimitKind::Deposit => "Minimum Deposit",
            LimitKind::Withdraw => "Minimum Withdraw",
            LimitKind::Other(raw) => raw,
        }
    }
}

/// One row of the minimum-limits table.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitRow {
    pub id: LimitId,
    pub kind: LimitKind,
    pub amount: Decimal,
}

impl TryFrom<LimitRowResponse> for LimitRow {
    type Error = SdkError;

    fn try_from(source: LimitRowResponse) -> Result<Self, Self::Error> {
        let id = source
            .object_id
            .or(source.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| SdkError::Validation("Limit row without id".to_string()))?;
        Ok(LimitRow {
            id,
            kind: LimitKind::from_wire(source.limit_type.as_deref().unwrap_or_default()),
            amount: source.amount,
        })
    }
}

/// The configured minimum for `kind`, if a row exists.
pub fn minimum_for(rows: &[LimitRow], kind: &LimitKind) -> Option<Decimal> {
    rows.iter().find(|r| &r.kind == kind).map(|r| r.amount)
}

// ─── Withdrawal window ───────────────────────────────────────────────────────

/// When users may request withdrawals (IST wall clock).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WithdrawalWindow {
    pub open: Option<NaiveTime>,
    pub close: Option<NaiveTime>,
    pub enabled: bool,
}

impl WithdrawalWindow {
    /// Enabled, both ends configured, and `at` inside `[open, close)`.
    pub fn is_open_at(&self, at: NaiveTime) -> bool {
        match (self.enabled, self.open, self.close) {
            (true, Some(open), Some(close)) => within_window(open, close, at),
            _ => false,
        }
    }

    pub fn is_open_now(&self, now: DateTime<Utc>) -> bool {
        self.is_open_at(to_ist(now).time())
    }
}

/// App settings as read from the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppSettings {
    pub withdrawal: WithdrawalWindow,
    /// The payload as received, used as the base of the next update.
    pub(crate) raw: AppSettingsResponse,
}

impl From<AppSettingsResponse> for AppSettings {
    fn from(raw: AppSettingsResponse) -> Self {
        let withdrawal = WithdrawalWindow {
            open: raw.withdraw_open_time.as_deref().and_then(parse_clock),
            close: raw.withdraw_close_time.as_deref().and_then(parse_clock),
            enabled: raw
                .enabled_flag()
                .and_then(ActiveStatus::from_wire)
                .map(|s| s.is_active())
                .unwrap_or(false),
        };
        Self { withdrawal, raw }
    }
}

impl AppSettings {
    /// Any other setting, by its raw key.
    pub fn extra(&self, key: &str) -> Option<&serde_json::Value> {
        self.raw.extra.get(key)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsFormError {
    #[error("Invalid withdrawal open time: {0:?}")]
    InvalidOpenTime(String),

    #[error("Invalid withdrawal close time: {0:?}")]
    InvalidCloseTime(String),

    #[error("Withdrawal open and close time cannot be the same")]
    EmptyWindow,
}

impl From<SettingsFormError> for SdkError {
    fn from(err: SettingsFormError) -> Self {
        SdkError::Validation(err.to_string())
    }
}

/// Withdrawal window panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WithdrawalWindowForm {
    pub open_time: String,
    pub close_time: String,
    pub enabled: bool,
}

impl From<&AppSettings> for WithdrawalWindowForm {
    fn from(settings: &AppSettings) -> Self {
        let w = settings.withdrawal;
        Self {
            open_time: w.open.map(format_clock).unwrap_or_default(),
            close_time: w.close.map(format_clock).unwrap_or_default(),
            enabled: w.enabled,
        }
    }
}

impl WithdrawalWindowForm {
    /// Merge the form into `current`, leaving every other setting untouched.
    pub fn apply_to(&self, current: &AppSettings) -> Result<AppSettingsResponse, SettingsFormError> {
        let open = parse_clock(&self.open_time)
            .ok_or_else(|| SettingsFormError::InvalidOpenTime(self.open_time.clone()))?;
        let close = parse_clock(&self.close_time)
            .ok_or_else(|| SettingsFormError::InvalidCloseTime(self.close_time.clone()))?;
        if open == close {
            return Err(SettingsFormError::EmptyWindow);
        }

        let mut body = current.raw.clone();
        body.withdraw_open_time = Some(format_clock(open));
        body.withdraw_close_time = Some(format_clock(close));
        body.set_enabled_flag(self.enabled);
        Ok(body)
    }
}
