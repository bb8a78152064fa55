//! Conversion: FundEntryResponse → FundEntry.
//!
//! Fund rows are never rejected: a ledger with a dropped row would produce
//! wrong totals. Unknown values fall back as documented on each enum.

use super::wire::FundEntryResponse;
use super::{FundDirection, FundEntry, FundSource, FundStatus};

impl From<FundEntryResponse> for FundEntry {
    fn from(source: FundEntryResponse) -> Self {
        let entry_type = source
            .entry_type
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        // Negative amounts are debits regardless of the declared type.
        let direction = if source.amount.is_sign_negative() && !source.amount.is_zero() {
            FundDirection::Debit
        } else {
            FundDirection::from_type(&entry_type)
        };

        let origin = source
            .source
            .as_deref()
            .and_then(FundSource::from_wire)
            .unwrap_or_else(|| FundSource::infer_from_type(&entry_type));

        FundEntry {
            id: source.object_id.or(source.id).unwrap_or_default(),
            amount: source.amount.abs(),
            direction,
            source: origin,
            status: FundStatus::from_wire(source.status.as_deref()),
            is_bonus: entry_type == "bonus",
            remark: source.remark.filter(|r| !r.trim().is_empty()),
            created_at: source.created_at,
        }
    }
}
