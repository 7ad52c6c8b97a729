//! Ledger: the ordered collection of expenses for a tracking session
//!
//! Order is insertion/file order, not necessarily chronological. Records have
//! no stable identifier; a record's identity is its current position in the
//! loaded sequence, so callers reload from storage immediately before
//! addressing by position.

use crate::error::{SpendError, SpendResult};

use super::expense::Expense;

/// An ordered sequence of expenses
///
/// Duplicates are legal and no field is unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// True when the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Append a record to the end of the sequence
    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Get a record by position
    pub fn get(&self, position: usize) -> Option<&Expense> {
        self.expenses.get(position)
    }

    /// Replace the record at `position`, returning the previous record
    pub fn replace(&mut self, position: usize, expense: Expense) -> SpendResult<Expense> {
        let slot = self
            .expenses
            .get_mut(position)
            .ok_or_else(|| SpendError::expense_not_found(format!("position {}", position)))?;
        Ok(std::mem::replace(slot, expense))
    }

    /// Remove and return the record at `position`, shifting later records down
    pub fn remove(&mut self, position: usize) -> SpendResult<Expense> {
        if position >= self.expenses.len() {
            return Err(SpendError::expense_not_found(format!(
                "position {}",
                position
            )));
        }
        Ok(self.expenses.remove(position))
    }

    /// Iterate records in ledger order
    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    /// The records as a slice, in ledger order
    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }
}

impl From<Vec<Expense>> for Ledger {
    fn from(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }
}

impl IntoIterator for Ledger {
    type Item = Expense;
    type IntoIter = std::vec::IntoIter<Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.into_iter()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}
