//! Market list state and filtering.

use super::{Market, MarketStatus};
use crate::shared::MarketId;

/// Status filter of the game list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(&self, status: MarketStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == MarketStatus::Active,
            StatusFilter::Inactive => status == MarketStatus::Inactive,
        }
    }
}

/// Name search plus status filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketFilter {
    pub query: String,
    pub status: StatusFilter,
}

impl MarketFilter {
    pub fn new(query: &str, status: StatusFilter) -> Self {
        Self {
            query: query.to_string(),
            status,
        }
    }

    /// Case-insensitive substring match on the name; a blank query matches all.
    pub fn matches(&self, market: &Market) -> bool {
        let query = self.query.trim().to_lowercase();
        self.status.matches(market.status)
            && (query.is_empty() || market.name.to_lowercase().contains(&query))
    }
}

/// Active/inactive totals shown above the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardCounts {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

/// The game list page: the last fetched markets, in server order.
///
/// This is a disposable view; replace it after every mutation.
#[derive(Debug, Clone, Default)]
pub struct MarketBoard {
    markets: Vec<Market>,
}

impl MarketBoard {
    pub fn new(markets: Vec<Market>) -> Self {
        Self { markets }
    }

    pub fn replace(&mut self, markets: Vec<Market>) {
        self.markets = markets;
    }

    pub fn markets(&self) -> &[Market] {
        &self.markets
    }

    pub fn get(&self, id: &MarketId) -> Option<&Market> {
        self.markets.iter().find(|m| &m.id == id)
    }

    /// Rows matching `filter`, preserving order.
    pub fn filtered(&self, filter: &MarketFilter) -> Vec<&Market> {
        self.markets.iter().filter(|m| filter.matches(m)).collect()
    }

    pub fn counts(&self) -> BoardCounts {
        let active = self
            .markets
            .iter()
            .filter(|m| m.status.is_active())
            .count();
        BoardCounts {
            total: self.markets.len(),
            active,
            inactive: self.markets.len() - active,
        }
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}
