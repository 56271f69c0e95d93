//! Reporting values derived from the raw entries.
use serde::{Deserialize, Serialize};

use crate::{BillContext, Participant};

/// Totals a presentation layer shows next to the settlement.
///
/// `total_paid` always sums the entered contributions, also under equal split
/// where balances ignore them. `bill_match` compares exactly, so it can report
/// a mismatch while every balance is settled within tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillSummary {
    pub total_paid: f64,
    pub pending_balance: f64,
    pub bill_match: bool,
}

pub(crate) fn summarize(participants: &[Participant], bill: &BillContext) -> BillSummary {
    let total_paid: f64 = participants.iter().map(|p| p.contribution).sum();
    BillSummary {
        total_paid,
        pending_balance: bill.total - total_paid,
        bill_match: total_paid == bill.total,
    }
}
