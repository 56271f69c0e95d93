use serde::{Deserialize, Serialize};

/// An amount as it arrives from a form or a hand-written document: either a
/// number or the raw text of a field.
///
/// Text is kept as-is; turning it into a number is the engine's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

pub mod bill {
    use super::*;

    /// A bill to split, as read from a bill document.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct BillInput {
        /// Agreed bill amount. Missing means `0`.
        #[serde(default)]
        pub total: Option<AmountInput>,
        /// Ignore entered contributions and measure everyone against an equal
        /// share only.
        #[serde(default)]
        pub equal_split: bool,
        #[serde(default)]
        pub participants: Vec<ParticipantInput>,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct ParticipantInput {
        #[serde(default)]
        pub name: String,
        /// What the participant paid. Missing means `0`.
        #[serde(default)]
        pub contribution: Option<AmountInput>,
    }
}

pub mod report {
    use super::*;

    /// Where a balance stands once the settlement tolerance is applied.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Standing {
        Settled,
        Owes,
        PaidExtra,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct BalanceView {
        pub name: String,
        /// Positive: paid extra. Negative: owes.
        pub balance: f64,
        pub standing: Standing,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransferView {
        pub from: String,
        pub to: String,
        pub amount: f64,
    }

    /// Response body for a settled bill.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct SettlementReport {
        pub balances: Vec<BalanceView>,
        pub transfers: Vec<TransferView>,
        /// Sum of the entered contributions, equal split or not.
        pub total_paid: f64,
        /// `total - total_paid`.
        pub pending_balance: f64,
        /// `total_paid == total`, compared exactly.
        pub bill_match: bool,
        /// Every balance is within the settlement tolerance.
        pub settled: bool,
    }
}
