//! Expense record model

use chrono::{Local, NaiveDateTime, Timelike};

use crate::error::{SpendError, SpendResult};

use super::category::Category;
use super::money::Money;

/// A single recorded expense
///
/// Immutable value: editing an expense means replacing it wholesale at its
/// position in the ledger. The timestamp is assigned at creation (second
/// precision, local time) and preserved verbatim through edits unless the
/// caller explicitly supplies a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// What the money was spent on (non-empty)
    pub name: String,

    /// Amount spent (strictly positive)
    pub amount: Money,

    /// Grouping label for the summary report
    pub category: Category,

    /// When the expense was recorded
    pub timestamp: NaiveDateTime,
}

impl Expense {
    /// Create a new expense stamped with the current local time
    pub fn new(name: impl Into<String>, amount: Money, category: Category) -> Self {
        Self::with_timestamp(name, amount, category, now_to_seconds())
    }

    /// Create an expense with an explicit timestamp (decode and edit paths)
    pub fn with_timestamp(
        name: impl Into<String>,
        amount: Money,
        category: Category,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            category,
            timestamp,
        }
    }

    /// Validate the record invariants: non-empty name, strictly positive amount
    pub fn validate(&self) -> SpendResult<()> {
        if self.name.trim().is_empty() {
            return Err(SpendError::Validation(
                "Expense name must not be empty".into(),
            ));
        }
        if !self.amount.is_positive() {
            return Err(SpendError::Validation(format!(
                "Expense amount must be positive, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}

/// Current local time truncated to second precision, matching the
/// `YYYY-MM-DD HH:MM:SS` resolution of the ledger file
fn now_to_seconds() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
