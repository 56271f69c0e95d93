//! Input records: who took part in the bill and what the bill is.
use serde::{Deserialize, Serialize};

use crate::amount::{normalize_amount, parse_amount};

/// A person sharing the bill and the amount they actually paid.
///
/// Names are display strings only, two participants may share a name.
/// The contribution is always finite: constructors normalize anything else
/// to `0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub contribution: f64,
}

impl Participant {
    pub fn new(name: impl Into<String>, contribution: f64) -> Self {
        Self {
            name: name.into(),
            contribution: normalize_amount(contribution),
        }
    }

    /// Builds a participant from the raw text of an amount field.
    pub fn from_input(name: impl Into<String>, contribution: &str) -> Self {
        Self::new(name, parse_amount(contribution))
    }

    /// The blank row a form adds for a new person: no name, nothing paid.
    pub fn unnamed() -> Self {
        Self::new(String::new(), 0.0)
    }
}

/// The bill being split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BillContext {
    /// Agreed bill amount. Negative values are accepted and propagate.
    pub total: f64,
    /// When set, entered contributions are ignored for balance purposes and
    /// every participant is measured only against the fair share.
    pub equal_split: bool,
}

impl BillContext {
    pub fn new(total: f64, equal_split: bool) -> Self {
        Self {
            total: normalize_amount(total),
            equal_split,
        }
    }

    /// Builds a bill context from the raw text of the total field.
    pub fn from_input(total: &str, equal_split: bool) -> Self {
        Self::new(parse_amount(total), equal_split)
    }
}
