//! Interactive menu mode
//!
//! The classic menu loop: add, edit, delete, summarize, exit. All prompting
//! and re-prompting validation lives here; the core modules only ever see
//! validated values.

use std::io::{self, Write};

use chrono::Local;
use colored::Colorize;

use crate::config::{Settings, SpendPaths};
use crate::error::{SpendError, SpendResult};
use crate::models::{Category, Expense, Money, DEFAULT_CATEGORIES};
use crate::reports::BudgetReport;
use crate::storage::LedgerStore;

use super::expense::{parse_positive_amount, print_numbered};
use super::report::render_report;

/// Run the interactive menu loop
///
/// The budget entered at the start of the session is stored in settings so
/// that later non-interactive `spend summary` runs can reuse it.
pub fn run_interactive(
    store: &LedgerStore,
    settings: &mut Settings,
    paths: &SpendPaths,
) -> SpendResult<()> {
    println!("Running Expense Tracker!");

    let budget = prompt_budget(settings)?;
    if settings.monthly_budget != Some(budget) {
        settings.monthly_budget = Some(budget);
        settings.save(paths)?;
    }

    loop {
        print_menu();
        let choice = prompt_string("Enter your choice: ")?;

        let result = match choice.as_str() {
            "1" => add_flow(store),
            "2" => edit_flow(store),
            "3" => delete_flow(store),
            "4" => summary_flow(store, budget),
            "5" => break,
            _ => {
                println!("Invalid choice. Please select a valid option.");
                Ok(())
            }
        };

        match result {
            // Lost stdin/stdout means the session is over, not a bad entry
            Err(e @ SpendError::Io(_)) => return Err(e),
            Err(e) => println!("{}", e.to_string().red()),
            Ok(()) => {}
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("Menu:");
    println!("1. Add Expense");
    println!("2. Edit Expense");
    println!("3. Delete Expense");
    println!("4. Summarize Expenses");
    println!("5. Exit");
}

fn add_flow(store: &LedgerStore) -> SpendResult<()> {
    let expense = prompt_expense()?;
    store.append(&expense)?;
    println!("Expense saved.");
    Ok(())
}

fn edit_flow(store: &LedgerStore) -> SpendResult<()> {
    let mut ledger = store.load()?;
    if ledger.is_empty() {
        println!("No expenses to edit.");
        return Ok(());
    }

    print_numbered(&ledger);
    let Some(index) = prompt_position("Enter the number of the expense to edit: ", ledger.len())?
    else {
        return Ok(());
    };

    let replacement = prompt_expense()?;
    ledger.replace(index, replacement)?;
    store.replace_all(&ledger)?;
    println!("Expense updated successfully.");
    Ok(())
}

fn delete_flow(store: &LedgerStore) -> SpendResult<()> {
    let mut ledger = store.load()?;
    if ledger.is_empty() {
        println!("No expenses to delete.");
        return Ok(());
    }

    print_numbered(&ledger);
    let Some(index) =
        prompt_position("Enter the number of the expense to delete: ", ledger.len())?
    else {
        return Ok(());
    };

    ledger.remove(index)?;
    store.replace_all(&ledger)?;
    println!("Expense deleted successfully.");
    Ok(())
}

fn summary_flow(store: &LedgerStore, budget: Money) -> SpendResult<()> {
    let ledger = store.load()?;
    if ledger.is_empty() {
        println!("No expenses to summarize.");
        return Ok(());
    }

    match BudgetReport::generate(&ledger, budget, Local::now().date_naive()) {
        Ok(report) => {
            print!("{}", render_report(&report));
            Ok(())
        }
        Err(SpendError::NoRemainingDays) => {
            println!("Today is the last day of the month; there are no days left to budget for.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Prompt once, returning the trimmed line
fn prompt_string(prompt: &str) -> SpendResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| SpendError::Io(e.to_string()))?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| SpendError::Io(e.to_string()))?;
    if read == 0 {
        return Err(SpendError::Io("unexpected end of input".into()));
    }
    Ok(input.trim().to_string())
}

/// Prompt for the monthly budget, offering the stored one as a default
fn prompt_budget(settings: &Settings) -> SpendResult<Money> {
    let prompt = match settings.monthly_budget {
        Some(current) => format!("Enter your budget for the month [{}]: RM", current),
        None => "Enter your budget for the month: RM".to_string(),
    };

    loop {
        let input = prompt_string(&prompt)?;

        if input.is_empty() {
            if let Some(current) = settings.monthly_budget {
                return Ok(current);
            }
        }

        match parse_positive_amount(&input) {
            Ok(amount) => return Ok(amount),
            Err(_) => println!("Budget must be a positive number."),
        }
    }
}

/// Prompt for a complete expense: name, amount, category
fn prompt_expense() -> SpendResult<Expense> {
    let name = loop {
        let name = prompt_string("Enter expense name: ")?;
        if !name.is_empty() {
            break name;
        }
        println!("Expense name must not be empty.");
    };

    let amount = loop {
        let input = prompt_string("Enter expense amount: RM")?;
        match parse_positive_amount(&input) {
            Ok(amount) => break amount,
            Err(_) => println!("Expense amount must be a positive number."),
        }
    };

    let category = prompt_category()?;

    let expense = Expense::new(name, amount, category);
    println!(
        "You have entered {} for {} on {}",
        expense.name,
        expense.amount.display_rm().red(),
        expense.timestamp.format(crate::storage::TIMESTAMP_FORMAT)
    );
    Ok(expense)
}

/// Prompt for a category from the numbered picker
fn prompt_category() -> SpendResult<Category> {
    loop {
        println!("Select a category: ");
        for (i, name) in DEFAULT_CATEGORIES.iter().enumerate() {
            println!("  {}. {}", i + 1, name);
        }

        let input = prompt_string(&format!(
            "Enter a category number [1 - {}]: ",
            DEFAULT_CATEGORIES.len()
        ))?;

        match input.parse::<usize>() {
            Ok(n) if (1..=DEFAULT_CATEGORIES.len()).contains(&n) => {
                return Ok(Category::parse(DEFAULT_CATEGORIES[n - 1]));
            }
            _ => println!(
                "Invalid category. Please choose a number from [1 - {}]",
                DEFAULT_CATEGORIES.len()
            ),
        }
    }
}

/// Prompt for a 1-based position, returning the 0-based index
///
/// Returns `None` after an invalid entry, sending the user back to the menu
/// so a stale listing is never acted on.
fn prompt_position(prompt: &str, len: usize) -> SpendResult<Option<usize>> {
    let input = prompt_string(prompt)?;
    match input.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Ok(Some(n - 1)),
        _ => {
            println!("Invalid number.");
            Ok(None)
        }
    }
}
