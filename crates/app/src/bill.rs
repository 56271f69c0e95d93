//! Bill documents in, settlement reports out.
//!
//! Maps between the `api_types` DTOs and the engine types. Amounts are
//! normalized here through `engine::amount`, so the engine only ever sees
//! finite numbers.
use std::path::Path;

use api_types::{
    AmountInput,
    bill::BillInput,
    report::{BalanceView, SettlementReport, Standing, TransferView},
};
use engine::{
    BillContext, Participant,
    amount::{normalize_amount, parse_amount},
};

use crate::error::Result;

/// Reads a bill document; the format follows the file extension.
pub fn load(path: &Path) -> Result<BillInput> {
    let bill: BillInput = config::Config::builder()
        .add_source(config::File::from(path))
        .build()?
        .try_deserialize()?;
    Ok(bill)
}

fn amount(input: Option<&AmountInput>) -> f64 {
    match input {
        Some(AmountInput::Number(value)) => normalize_amount(*value),
        Some(AmountInput::Text(raw)) => parse_amount(raw),
        None => 0.0,
    }
}

/// Converts a bill document into engine inputs.
///
/// `force_equal_split` turns equal split on even if the document leaves it
/// off.
pub fn to_engine(input: &BillInput, force_equal_split: bool) -> (Vec<Participant>, BillContext) {
    let participants = input
        .participants
        .iter()
        .map(|p| Participant::new(p.name.clone(), amount(p.contribution.as_ref())))
        .collect();
    let bill = BillContext::new(
        amount(input.total.as_ref()),
        input.equal_split || force_equal_split,
    );
    (participants, bill)
}

fn standing(standing: engine::Standing) -> Standing {
    match standing {
        engine::Standing::Settled => Standing::Settled,
        engine::Standing::Owes => Standing::Owes,
        engine::Standing::PaidExtra => Standing::PaidExtra,
    }
}

pub fn to_report(report: engine::SettlementReport) -> SettlementReport {
    SettlementReport {
        balances: report
            .balances
            .into_iter()
            .map(|b| BalanceView {
                standing: standing(b.standing()),
                name: b.name,
                balance: b.balance,
            })
            .collect(),
        transfers: report
            .transfers
            .into_iter()
            .map(|t| TransferView {
                from: t.from,
                to: t.to,
                amount: t.amount,
            })
            .collect(),
        total_paid: report.summary.total_paid,
        pending_balance: report.summary.pending_balance,
        bill_match: report.summary.bill_match,
        settled: report.settled,
    }
}
