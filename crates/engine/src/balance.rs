//! Per-participant balances against the fair share of the bill.
use serde::{Deserialize, Serialize};

use crate::{BillContext, EngineError, Participant, ResultEngine, amount::normalize_amount};

/// Balances whose magnitude is at most this value count as settled.
///
/// Expressed in the bill's currency (one minor unit for two-decimal
/// currencies).
pub const SETTLEMENT_TOLERANCE: f64 = 0.01;

/// Signed deviation of a participant's effective contribution from their fair
/// share.
///
/// - positive: paid more than their share (creditor)
/// - negative: paid less than their share (debtor)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub name: String,
    pub balance: f64,
}

/// Where a balance stands once the settlement tolerance is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Settled,
    Owes,
    PaidExtra,
}

impl Balance {
    /// Non-finite balances (an overflowing subtraction, for instance) become
    /// `0`.
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Self {
            name: name.into(),
            balance: normalize_amount(balance),
        }
    }

    #[must_use]
    pub fn standing(&self) -> Standing {
        if self.balance < -SETTLEMENT_TOLERANCE {
            Standing::Owes
        } else if self.balance > SETTLEMENT_TOLERANCE {
            Standing::PaidExtra
        } else {
            Standing::Settled
        }
    }

    /// Returns `true` if the balance is within the settlement tolerance.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.standing() == Standing::Settled
    }
}

/// Computes every participant's balance, in input order.
///
/// `fair_share = total / participant_count`; the effective contribution is
/// `0` under equal split and the entered contribution otherwise.
pub(crate) fn compute_balances(
    participants: &[Participant],
    bill: &BillContext,
) -> ResultEngine<Vec<Balance>> {
    if participants.is_empty() {
        return Err(EngineError::EmptyParticipantSet);
    }

    let fair_share = bill.total / participants.len() as f64;
    let balances: Vec<Balance> = participants
        .iter()
        .map(|participant| {
            let effective = if bill.equal_split {
                0.0
            } else {
                participant.contribution
            };
            Balance::new(participant.name.clone(), effective - fair_share)
        })
        .collect();

    tracing::debug!(
        participants = participants.len(),
        fair_share,
        equal_split = bill.equal_split,
        "computed balances"
    );

    // Under equal split the balances always net to `-total`.
    let residual: f64 = balances.iter().map(|b| b.balance).sum();
    if !bill.equal_split && residual.abs() > SETTLEMENT_TOLERANCE {
        tracing::warn!(residual, "balances do not net to zero; a pending balance remains");
    }

    Ok(balances)
}

/// Returns `true` when every balance is within [`SETTLEMENT_TOLERANCE`].
pub(crate) fn is_settled(balances: &[Balance]) -> bool {
    balances.iter().all(Balance::is_settled)
}
