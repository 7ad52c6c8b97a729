//! Summary CLI command
//!
//! Renders a generated budget report the way the tracker has always printed
//! it: category totals, overall totals, the days left in the month with the
//! per-day allowance, then the record-by-record balance walk. Spending is
//! highlighted red, remaining balances blue.

use chrono::{Local, NaiveDate};
use colored::Colorize;

use crate::config::Settings;
use crate::error::{SpendError, SpendResult};
use crate::models::Money;
use crate::reports::BudgetReport;
use crate::storage::LedgerStore;

use super::expense::parse_positive_amount;

/// Render a report for terminal display
pub fn render_report(report: &BudgetReport) -> String {
    let mut output = String::new();

    for entry in &report.category_totals {
        output.push_str(&format!(
            "  {}: {}\n",
            entry.category,
            entry.total.display_rm().red()
        ));
    }

    output.push_str(&format!(
        "Total Spent: {}\n",
        report.total_spent.display_rm().red()
    ));
    output.push_str(&format!(
        "Budget Remaining: {}\n",
        report.remaining_budget.display_rm().blue()
    ));
    output.push_str(&format!(
        "Remaining days in the current month: {}\n",
        report.remaining_days
    ));
    output.push_str(&format!(
        "Budget Per Day: {}\n",
        report.daily_budget.display_rm().blue()
    ));

    for step in &report.running_balances {
        output.push_str(&format!(
            "{} - {}: {}, Category: {}\n",
            step.expense.timestamp.format(crate::storage::TIMESTAMP_FORMAT),
            step.expense.name,
            step.expense.amount.display_rm().red(),
            step.expense.category
        ));
        output.push_str(&format!(
            "Budget left after this expense: {}\n",
            step.balance_after.display_rm().blue()
        ));
    }

    if report.exceeded {
        output.push_str(&format!(
            "{}\n",
            "Warning: You have exceeded your budget!".red()
        ));
    }

    output
}

/// Resolve the budget for a summary: `--budget` override, else the stored
/// default from settings
pub fn resolve_budget(settings: &Settings, budget_override: Option<&str>) -> SpendResult<Money> {
    match budget_override {
        Some(input) => parse_positive_amount(input),
        None => settings.monthly_budget.ok_or_else(|| {
            SpendError::Config(
                "No monthly budget configured; pass --budget or set one with 'spend interactive'"
                    .into(),
            )
        }),
    }
}

/// Handle `spend summary`
pub fn handle_summary(
    store: &LedgerStore,
    settings: &Settings,
    budget_override: Option<&str>,
    as_of: Option<&str>,
) -> SpendResult<()> {
    let budget = resolve_budget(settings, budget_override)?;

    let as_of = match as_of {
        Some(input) => NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map_err(|e| SpendError::Validation(format!("Invalid date {:?}: {}", input, e)))?,
        None => Local::now().date_naive(),
    };

    let ledger = store.load()?;
    if ledger.is_empty() {
        println!("No expenses to summarize.");
        return Ok(());
    }

    let report = BudgetReport::generate(&ledger, budget, as_of)?;
    print!("{}", render_report(&report));
    Ok(())
}
