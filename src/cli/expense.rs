//! Expense CLI commands
//!
//! Implements the add/list/edit/delete commands. Positions shown to and
//! accepted from the user are 1-based, matching the numbered listing. Every
//! handler reloads the ledger from disk before addressing by position, since
//! a record's identity is its current index in the file.

use colored::Colorize;

use crate::error::{SpendError, SpendResult};
use crate::models::{Category, Expense, Ledger, Money};
use crate::storage::LedgerStore;

/// Parse a user-supplied amount, requiring a strictly positive value
pub fn parse_positive_amount(input: &str) -> SpendResult<Money> {
    let amount = Money::parse(input)
        .map_err(|e| SpendError::Validation(e.to_string()))?;
    if !amount.is_positive() {
        return Err(SpendError::Validation(format!(
            "Amount must be a positive number, got {}",
            amount
        )));
    }
    Ok(amount)
}

/// Convert a 1-based user position into a 0-based ledger index
fn to_index(position: usize) -> SpendResult<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| SpendError::expense_not_found("position 0 (positions start at 1)"))
}

/// Format one expense the way the numbered listing shows it
pub fn format_expense_line(expense: &Expense) -> String {
    format!(
        "{} - {}: {}, Category: {}",
        expense.timestamp.format(crate::storage::TIMESTAMP_FORMAT),
        expense.name,
        expense.amount.display_rm().red(),
        expense.category
    )
}

/// Print the ledger as a 1-based numbered listing
pub fn print_numbered(ledger: &Ledger) {
    for (i, expense) in ledger.iter().enumerate() {
        println!("{}. {}", i + 1, format_expense_line(expense));
    }
}

/// Handle `spend add`
pub fn handle_add(
    store: &LedgerStore,
    name: &str,
    amount: &str,
    category: &str,
    date: Option<&str>,
) -> SpendResult<()> {
    let amount = parse_positive_amount(amount)?;
    let category = Category::parse(category);

    let expense = match date {
        Some(date) => {
            let timestamp = chrono::NaiveDateTime::parse_from_str(
                date,
                crate::storage::TIMESTAMP_FORMAT,
            )
            .map_err(|e| SpendError::Validation(format!("Invalid date {:?}: {}", date, e)))?;
            Expense::with_timestamp(name, amount, category, timestamp)
        }
        None => Expense::new(name, amount, category),
    };

    store.append(&expense)?;
    println!(
        "Saved {} for {} on {}",
        expense.name,
        expense.amount.display_rm().red(),
        expense.timestamp.format(crate::storage::TIMESTAMP_FORMAT)
    );
    Ok(())
}

/// Handle `spend list`
pub fn handle_list(store: &LedgerStore) -> SpendResult<()> {
    let ledger = store.load()?;
    if ledger.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }
    print_numbered(&ledger);
    Ok(())
}

/// Handle `spend edit`
///
/// The stored timestamp and category are preserved unless `--date` or
/// `--category` supply new ones.
pub fn handle_edit(
    store: &LedgerStore,
    position: usize,
    name: &str,
    amount: &str,
    category: Option<&str>,
    date: Option<&str>,
) -> SpendResult<()> {
    let amount = parse_positive_amount(amount)?;

    let mut ledger = store.load()?;
    let index = to_index(position)?;

    let previous = ledger
        .get(index)
        .ok_or_else(|| SpendError::expense_not_found(format!("position {}", position)))?;

    let category = match category {
        Some(label) => Category::parse(label),
        None => previous.category.clone(),
    };

    let timestamp = match date {
        Some(date) => chrono::NaiveDateTime::parse_from_str(
            date,
            crate::storage::TIMESTAMP_FORMAT,
        )
        .map_err(|e| SpendError::Validation(format!("Invalid date {:?}: {}", date, e)))?,
        None => previous.timestamp,
    };

    let replacement = Expense::with_timestamp(name, amount, category, timestamp);
    ledger.replace(index, replacement)?;
    store.replace_all(&ledger)?;

    println!("Expense {} updated.", position);
    Ok(())
}

/// Handle `spend delete`
pub fn handle_delete(store: &LedgerStore, position: usize) -> SpendResult<()> {
    let mut ledger = store.load()?;
    let index = to_index(position)?;

    let removed = ledger.remove(index).map_err(|_| {
        SpendError::expense_not_found(format!(
            "position {} (ledger has {} records)",
            position,
            ledger.len()
        ))
    })?;
    store.replace_all(&ledger)?;

    println!("Deleted {}: {}", position, format_expense_line(&removed));
    Ok(())
}
