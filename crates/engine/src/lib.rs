//! Settlement engine for a shared bill.
//!
//! Given the bill total and what each participant paid, the engine derives
//! everyone's balance against an equal share and a short list of transfers
//! that brings those balances back to zero.
//!
//! The engine is stateless: every call recomputes from its inputs and nothing
//! outside a call's local working copies is mutated.
//!
//! ```rust
//! use engine::{BillContext, Participant, SettlementEngine};
//!
//! let participants = vec![
//!     Participant::new("A", 300.0),
//!     Participant::new("B", 0.0),
//!     Participant::new("C", 0.0),
//! ];
//! let report = SettlementEngine
//!     .settle(&participants, &BillContext::new(300.0, false))
//!     .unwrap();
//!
//! assert_eq!(report.transfers.len(), 2);
//! assert_eq!(report.transfers[0].from, "B");
//! assert_eq!(report.transfers[0].to, "A");
//! assert!(report.summary.bill_match);
//! ```
pub use balance::{Balance, SETTLEMENT_TOLERANCE, Standing};
pub use error::EngineError;
pub use participant::{BillContext, Participant};
pub use settlement::Transfer;
pub use summary::BillSummary;

use serde::{Deserialize, Serialize};

pub mod amount;
mod balance;
mod error;
mod participant;
mod settlement;
mod summary;

pub type ResultEngine<T> = Result<T, EngineError>;

/// Everything a presentation layer needs for one bill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// One entry per participant, in input order.
    pub balances: Vec<Balance>,
    /// Transfers in emission order.
    pub transfers: Vec<Transfer>,
    pub summary: BillSummary,
    /// `true` when every balance is within [`SETTLEMENT_TOLERANCE`].
    pub settled: bool,
}

/// Computes balances and settlements for a bill.
///
/// A zero-sized handle: it holds no state, so it is `Copy`, `Send` and `Sync`
/// and concurrent calls never interfere.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettlementEngine;

impl SettlementEngine {
    /// Computes each participant's signed balance, in input order.
    ///
    /// Fails with [`EngineError::EmptyParticipantSet`] when `participants` is
    /// empty.
    pub fn compute_balances(
        &self,
        participants: &[Participant],
        bill: &BillContext,
    ) -> ResultEngine<Vec<Balance>> {
        balance::compute_balances(participants, bill)
    }

    /// Matches debtors against creditors and returns the transfers.
    ///
    /// Balances within tolerance are skipped, the largest debts and credits
    /// are matched first and ties keep the input order. When only debtors (or
    /// only creditors) exist the result is empty.
    pub fn compute_settlements(&self, balances: &[Balance]) -> Vec<Transfer> {
        settlement::compute_settlements(balances)
    }

    /// Returns `true` when every balance is within [`SETTLEMENT_TOLERANCE`].
    pub fn is_settled(&self, balances: &[Balance]) -> bool {
        balance::is_settled(balances)
    }

    /// Total paid, pending balance and exact bill match.
    pub fn summarize(&self, participants: &[Participant], bill: &BillContext) -> BillSummary {
        summary::summarize(participants, bill)
    }

    /// Runs the whole pipeline: balances, transfers, summary.
    pub fn settle(
        &self,
        participants: &[Participant],
        bill: &BillContext,
    ) -> ResultEngine<SettlementReport> {
        let balances = self.compute_balances(participants, bill)?;
        let transfers = self.compute_settlements(&balances);
        let settled = self.is_settled(&balances);
        let summary = self.summarize(participants, bill);

        tracing::info!(
            participants = participants.len(),
            transfers = transfers.len(),
            settled,
            bill_match = summary.bill_match,
            "settlement report computed"
        );

        Ok(SettlementReport {
            balances,
            transfers,
            summary,
            settled,
        })
    }
}
