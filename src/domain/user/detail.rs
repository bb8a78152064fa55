//! The user-detail page: profile plus fund, bid and winning history.

use crate::domain::bid::{total_winnings, Bid, Winning};
use crate::domain::fund::{FundHistory, FundSummary};
use crate::domain::user::User;
use crate::shared::{PageWindow, Paginator};
use rust_decimal::Decimal;

/// Everything the user-detail page shows, loaded together.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDetail {
    pub user: User,
    pub funds: FundHistory,
    pub bids: Vec<Bid>,
    pub winnings: Vec<Winning>,
}

impl UserDetail {
    pub fn fund_summary(&self) -> FundSummary {
        self.funds.summary()
    }

    /// The current page of bid history.
    pub fn bid_page(&self, paginator: &Paginator) -> PageWindow<'_, Bid> {
        paginator.window(&self.bids)
    }

    pub fn winning_page(&self, paginator: &Paginator) -> PageWindow<'_, Winning> {
        paginator.window(&self.winnings)
    }

    pub fn total_winnings(&self) -> Decimal {
        total_winnings(&self.winnings)
    }
}
