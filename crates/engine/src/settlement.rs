//! Greedy debtor/creditor matching.
//!
//! Debtors are served from the largest debt down, each against the current
//! largest credit. Every step closes at least one side, so the number of
//! transfers is at most `debtors + creditors - 1`. This is a heuristic for a
//! small transfer count, not a guarantee of the minimum for every
//! distribution.
use serde::{Deserialize, Serialize};

use crate::{Balance, SETTLEMENT_TOLERANCE};

/// A single payment instruction from a debtor to a creditor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Working copy of a balance used while matching.
struct Position<'a> {
    name: &'a str,
    remaining: f64,
}

/// Produces the transfers that bring every balance back within tolerance.
///
/// Balances already within tolerance never take part. Ties in magnitude keep
/// the order of `balances`. The input is not modified.
///
/// When only one side exists (for instance everyone owes and nobody paid
/// extra) nothing can be matched and the result is empty; whatever remains is
/// the caller's pending balance. Non-finite balances never take part.
pub(crate) fn compute_settlements(balances: &[Balance]) -> Vec<Transfer> {
    let mut debtors: Vec<Position<'_>> = balances
        .iter()
        .filter(|b| b.balance.is_finite() && b.balance < -SETTLEMENT_TOLERANCE)
        .map(|b| Position {
            name: &b.name,
            remaining: b.balance,
        })
        .collect();
    let mut creditors: Vec<Position<'_>> = balances
        .iter()
        .filter(|b| b.balance.is_finite() && b.balance > SETTLEMENT_TOLERANCE)
        .map(|b| Position {
            name: &b.name,
            remaining: b.balance,
        })
        .collect();

    // `sort_by` is stable: equal balances keep their input order.
    debtors.sort_by(|a, b| a.remaining.total_cmp(&b.remaining));
    creditors.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));

    tracing::debug!(
        debtors = debtors.len(),
        creditors = creditors.len(),
        "matching balances"
    );

    let mut transfers = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];

        let amount = creditor.remaining.min(-debtor.remaining);
        transfers.push(Transfer {
            from: debtor.name.to_string(),
            to: creditor.name.to_string(),
            amount,
        });

        debtor.remaining += amount;
        creditor.remaining -= amount;

        let debtor_closed = debtor.remaining.abs() <= SETTLEMENT_TOLERANCE;
        let creditor_closed = creditor.remaining.abs() <= SETTLEMENT_TOLERANCE;
        if !debtor_closed && !creditor_closed {
            tracing::warn!(
                debtor = debtor.name,
                creditor = creditor.name,
                "matching step closed neither side; stopping"
            );
            break;
        }
        if debtor_closed {
            i += 1;
        }
        if creditor_closed {
            j += 1;
        }
    }

    tracing::debug!(transfers = transfers.len(), "settlement computed");
    transfers
}
