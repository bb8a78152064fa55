//! Fund domain: a user's ledger and its admin-vs-user split.
//!
//! Deposit-source classification lives in exactly one place,
//! [`FundEntry::category`]. Everything that buckets or totals fund history
//! goes through it.

mod convert;
pub mod wire;

use crate::shared::FundEntryId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Money in or out of the user's wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundDirection {
    Credit,
    Debit,
}

impl FundDirection {
    /// `debit`/`withdraw*` are debits; everything else credits.
    fn from_type(entry_type: &str) -> Self {
        match entry_type {
            "debit" | "withdraw" | "withdrawal" | "withdrawfunds" => FundDirection::Debit,
            _ => FundDirection::Credit,
        }
    }
}

/// Who initiated the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundSource {
    Admin,
    User,
}

impl FundSource {
    fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" | "superadmin" | "system" => Some(FundSource::Admin),
            "user" | "self" | "customer" => Some(FundSource::User),
            _ => None,
        }
    }

    /// Without an explicit source, `deposit`/`withdraw*` come from the user and
    /// every other type (`credit`, `debit`, `bonus`) from an admin.
    fn infer_from_type(entry_type: &str) -> Self {
        match entry_type {
            "deposit" | "withdraw" | "withdrawal" => FundSource::User,
            _ => FundSource::Admin,
        }
    }
}

/// Approval state. A missing or unrecognised status counts as approved;
/// admin adjustments carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundStatus {
    Pending,
    Approved,
    Rejected,
}

impl FundStatus {
    fn from_wire(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("pending") | Some("processing") => FundStatus::Pending,
            Some("rejected") | Some("declined") | Some("failed") | Some("cancelled") => {
                FundStatus::Rejected
            }
            _ => FundStatus::Approved,
        }
    }
}

/// The four ledger buckets, plus everything that belongs to none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundCategory {
    AdminCredit,
    AdminDebit,
    /// User deposits, approved only.
    UserDeposit,
    /// User withdrawals that were not rejected.
    Withdrawal,
    /// Pending or rejected deposits, rejected withdrawals.
    Other,
}

/// A validated ledger entry. `amount` is always non-negative; the sign lives
/// in `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct FundEntry {
    pub id: FundEntryId,
    pub amount: Decimal,
    pub direction: FundDirection,
    pub source: FundSource,
    pub status: FundStatus,
    pub is_bonus: bool,
    pub remark: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl FundEntry {
    pub fn category(&self) -> FundCategory {
        match (self.source, self.direction, self.status) {
            (FundSource::Admin, FundDirection::Credit, _) => FundCategory::AdminCredit,
            (FundSource::Admin, FundDirection::Debit, _) => FundCategory::AdminDebit,
            (FundSource::User, FundDirection::Credit, FundStatus::Approved) => {
                FundCategory::UserDeposit
            }
            (FundSource::User, FundDirection::Debit, FundStatus::Rejected) => FundCategory::Other,
            (FundSource::User, FundDirection::Debit, _) => FundCategory::Withdrawal,
            (FundSource::User, FundDirection::Credit, _) => FundCategory::Other,
        }
    }
}

/// Totals per bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FundSummary {
    pub admin_credits: Decimal,
    pub admin_debits: Decimal,
    pub user_deposits: Decimal,
    pub withdrawals: Decimal,
    /// Bonus credits, already included in `admin_credits`.
    pub bonus_credits: Decimal,
}

impl FundSummary {
    /// Admin credits plus approved user deposits.
    pub fn total_credits(&self) -> Decimal {
        self.admin_credits + self.user_deposits
    }

    pub fn total_debits(&self) -> Decimal {
        self.admin_debits + self.withdrawals
    }

    pub fn net(&self) -> Decimal {
        self.total_credits() - self.total_debits()
    }
}

/// A user's fund ledger as fetched, newest first as the backend sends it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundHistory {
    entries: Vec<FundEntry>,
}

impl FundHistory {
    pub fn new(entries: Vec<FundEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FundEntry] {
        &self.entries
    }

    pub fn by_category(&self, category: FundCategory) -> Vec<&FundEntry> {
        self.entries
            .iter()
            .filter(|e| e.category() == category)
            .collect()
    }

    pub fn summary(&self) -> FundSummary {
        self.entries
            .iter()
            .fold(FundSummary::default(), |mut acc, entry| {
                match entry.category() {
                    FundCategory::AdminCredit => {
                        acc.admin_credits += entry.amount;
                        if entry.is_bonus {
                            acc.bonus_credits += entry.amount;
                        }
                    }
                    FundCategory::AdminDebit => acc.admin_debits += entry.amount,
                    FundCategory::UserDeposit => acc.user_deposits += entry.amount,
                    FundCategory::Withdrawal => acc.withdrawals += entry.amount,
                    FundCategory::Other => {}
                }
                acc
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<wire::FundEntryResponse>> for FundHistory {
    fn from(raw: Vec<wire::FundEntryResponse>) -> Self {
        Self::new(raw.into_iter().map(FundEntry::from).collect())
    }
}
