//! Bid history, winnings and admin bet edits.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::error::SdkError;
use crate::shared::{parse_amount, AmountError, BetId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

use wire::{BetUpdateRequest, BidResponse, WinningResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BidStatus {
    #[default]
    Pending,
    Won,
    Lost,
}

impl BidStatus {
    /// Unknown or missing values are treated as still pending.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("won") | Some("win") | Some("winner") => BidStatus::Won,
            Some("lost") | Some("lose") | Some("loss") => BidStatus::Lost,
            _ => BidStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Pending => "pending",
            BidStatus::Won => "won",
            BidStatus::Lost => "lost",
        }
    }
}

impl fmt::Display for BidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bid-history row.
#[derive(Debug, Clone, PartialEq)]
pub struct Bid {
    pub id: BetId,
    pub market_name: String,
    pub game_type: String,
    pub session: Option<String>,
    pub digits: String,
    pub points: Decimal,
    pub status: BidStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<BidResponse> for Bid {
    fn from(source: BidResponse) -> Self {
        Bid {
            id: source.object_id.or(source.id).unwrap_or_default(),
            market_name: source.market_name.unwrap_or_default(),
            game_type: source.game_type.unwrap_or_default(),
            session: source.session.filter(|s| !s.trim().is_empty()),
            digits: source.digits.unwrap_or_default(),
            points: source.points,
            status: BidStatus::from_wire(source.status.as_deref()),
            created_at: source.created_at,
        }
    }
}

/// One winning-history row.
#[derive(Debug, Clone, PartialEq)]
pub struct Winning {
    pub id: BetId,
    pub market_name: String,
    pub game_type: String,
    pub digits: String,
    pub points: Decimal,
    pub winning_amount: Decimal,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<WinningResponse> for Winning {
    fn from(source: WinningResponse) -> Self {
        Winning {
            id: source.object_id.or(source.id).unwrap_or_default(),
            market_name: source.market_name.unwrap_or_default(),
            game_type: source.game_type.unwrap_or_default(),
            digits: source.digits.unwrap_or_default(),
            points: source.points,
            winning_amount: source.winning_amount,
            created_at: source.created_at,
        }
    }
}

pub fn total_winnings(winnings: &[Winning]) -> Decimal {
    winnings.iter().map(|w| w.winning_amount).sum()
}

pub fn total_points(bids: &[Bid]) -> Decimal {
    bids.iter().map(|b| b.points).sum()
}

// ─── Bet edit ────────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BetEditError {
    #[error("Digits are required")]
    EmptyDigits,

    #[error("Digits must contain only 0-9: {0:?}")]
    InvalidDigits(String),

    #[error("Points: {0}")]
    Points(#[from] AmountError),
}

impl From<BetEditError> for SdkError {
    fn from(err: BetEditError) -> Self {
        SdkError::Validation(err.to_string())
    }
}

/// The edit-bet dialog: new digits and points for an existing bid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BetEdit {
    pub digits: String,
    pub points: String,
}

impl BetEdit {
    pub fn new(digits: impl Into<String>, points: impl Into<String>) -> Self {
        Self {
            digits: digits.into(),
            points: points.into(),
        }
    }

    pub fn validate(&self) -> Result<BetUpdateRequest, BetEditError> {
        let digits = self.digits.trim();
        if digits.is_empty() {
            return Err(BetEditError::EmptyDigits);
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(BetEditError::InvalidDigits(digits.to_string()));
        }
        let points = parse_amount(&self.points)?;
        Ok(BetUpdateRequest {
            digits: digits.to_string(),
            points,
        })
    }
}

impl From<&Bid> for BetEdit {
    fn from(bid: &Bid) -> Self {
        Self {
            digits: bid.digits.clone(),
            points: bid.points.normalize().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bid_status_from_wire() {
        assert_eq!(BidStatus::from_wire(Some("Won")), BidStatus::Won);
        assert_eq!(BidStatus::from_wire(Some("lost")), BidStatus::Lost);
        assert_eq!(BidStatus::from_wire(Some("settling")), BidStatus::Pending);
        assert_eq!(BidStatus::from_wire(None), BidStatus::Pending);
    }

    #[test]
    fn test_bid_from_response() {
        let raw: BidResponse = serde_json::from_value(json!({
            "_id": "b9",
            "market_name": "KALYAN",
            "game_type": "jodi",
            "session": "",
            "digits": "45",
            "points": 20,
            "status": "lost"
        }))
        .unwrap();
        let bid = Bid::from(raw);
        assert_eq!(bid.id.as_str(), "b9");
        assert_eq!(bid.session, None);
        assert_eq!(bid.status, BidStatus::Lost);
        assert_eq!(BetEdit::from(&bid), BetEdit::new("45", "20"));
    }

    #[test]
    fn test_total_winnings() {
        let make = |amount: i64| Winning {
            id: BetId::from("w"),
            market_name: String::new(),
            game_type: String::new(),
            digits: "1".to_string(),
            points: Decimal::from(10),
            winning_amount: Decimal::from(amount),
            created_at: None,
        };
        assert_eq!(total_winnings(&[make(90), make(1400)]), Decimal::from(1490));
        assert_eq!(total_winnings(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_total_points() {
        let make = |points: i64| Bid {
            id: BetId::from("b"),
            market_name: String::new(),
            game_type: String::new(),
            session: None,
            digits: "1".to_string(),
            points: Decimal::from(points),
            status: BidStatus::Pending,
            created_at: None,
        };
        assert_eq!(total_points(&[make(10), make(25), make(5)]), Decimal::from(40));
        assert_eq!(total_points(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_bet_edit_validation() {
        let req = BetEdit::new(" 123 ", "50").validate().unwrap();
        assert_eq!(req.digits, "123");
        assert_eq!(req.points, Decimal::from(50));

        assert_eq!(BetEdit::new("", "50").validate(), Err(BetEditError::EmptyDigits));
        assert_eq!(
            BetEdit::new("1a", "50").validate(),
            Err(BetEditError::InvalidDigits("1a".to_string()))
        );
        assert_eq!(
            BetEdit::new("12", "0").validate(),
            Err(BetEditError::Points(AmountError::NotPositive))
        );
        assert_eq!(
            BetEdit::new("12", "ten").validate(),
            Err(BetEditError::Points(AmountError::NotANumber("ten".to_string())))
        );
    }
}
