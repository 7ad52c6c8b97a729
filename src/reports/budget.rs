//! Monthly budget report
//!
//! Summarizes a ledger against a monthly budget: per-category totals, total
//! spent, remaining budget, remaining days in the calendar month, the daily
//! allowance derived from them, and a record-by-record running balance.

use chrono::{Datelike, NaiveDate};

use crate::error::{SpendError, SpendResult};
use crate::models::{Category, Expense, Ledger, Money};

/// Total spending for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category label
    pub category: Category,
    /// Sum of amounts for this category
    pub total: Money,
}

/// One step of the ledger-order balance walk
///
/// `balance_after` is the budget remaining after subtracting this record and
/// every record before it in ledger order. It is a partial sum, distinct from
/// the report's final `remaining_budget`; the two coincide only at the last
/// record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningBalance {
    /// The record at this step
    pub expense: Expense,
    /// Budget remaining after this record
    pub balance_after: Money,
}

/// Budget summary for one ledger
#[derive(Debug, Clone)]
pub struct BudgetReport {
    /// The configured budget for the month
    pub monthly_budget: Money,
    /// The date the report was computed for
    pub as_of: NaiveDate,
    /// Per-category totals, in order of each category's first appearance
    pub category_totals: Vec<CategoryTotal>,
    /// Sum of all recorded amounts
    pub total_spent: Money,
    /// `monthly_budget - total_spent`
    pub remaining_budget: Money,
    /// Calendar days in the month of `as_of`
    pub days_in_month: u32,
    /// Days left in the month after `as_of`
    pub remaining_days: u32,
    /// `remaining_budget` spread over `remaining_days` (truncated to sen)
    pub daily_budget: Money,
    /// The ledger-order balance walk, one entry per record
    pub running_balances: Vec<RunningBalance>,
    /// Whether spending has exceeded the budget; see `generate`
    pub exceeded: bool,
}

impl BudgetReport {
    /// Generate a budget report for a ledger
    ///
    /// Fails with `NoRemainingDays` when `as_of` is the last day of its
    /// month, since no days remain to spread the remaining budget over.
    ///
    /// The `exceeded` flag compares total spending against the post-walk
    /// running balance rather than the monthly budget, so it only trips once
    /// spending passes half the budget. This reproduces the behavior the
    /// tracker has always had; callers relying on a strict over-budget check
    /// should compare `total_spent` with `monthly_budget` themselves.
    pub fn generate(
        ledger: &Ledger,
        monthly_budget: Money,
        as_of: NaiveDate,
    ) -> SpendResult<Self> {
        // Category totals in first-appearance order, so report output is
        // deterministic for the same ledger.
        let mut category_totals: Vec<CategoryTotal> = Vec::new();
        for expense in ledger {
            match category_totals
                .iter_mut()
                .find(|t| t.category == expense.category)
            {
                Some(entry) => entry.total += expense.amount,
                None => category_totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                }),
            }
        }

        let total_spent: Money = ledger.iter().map(|e| e.amount).sum();
        let remaining_budget = monthly_budget - total_spent;

        let days_in_month = days_in_month(as_of);
        let remaining_days = days_in_month - as_of.day();
        if remaining_days == 0 {
            return Err(SpendError::NoRemainingDays);
        }
        let daily_budget = remaining_budget.per_day(remaining_days);

        // Walk records in ledger order (not necessarily chronological),
        // recording the balance after each one.
        let mut balance = monthly_budget;
        let mut running_balances = Vec::with_capacity(ledger.len());
        for expense in ledger {
            balance -= expense.amount;
            running_balances.push(RunningBalance {
                expense: expense.clone(),
                balance_after: balance,
            });
        }

        let exceeded = total_spent > balance;

        Ok(Self {
            monthly_budget,
            as_of,
            category_totals,
            total_spent,
            remaining_budget,
            days_in_month,
            remaining_days,
            daily_budget,
            running_balances,
            exceeded,
        })
    }
}

/// Number of calendar days in the month containing `date`
fn days_in_month(date: NaiveDate) -> u32 {
    let next_month_first = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    next_month_first
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDateTime;

    fn expense(name: &str, sen: i64, category: &str) -> Expense {
        Expense::with_timestamp(
            name,
            Money::from_sen(sen),
            Category::parse(category),
            NaiveDateTime::parse_from_str("2024-01-01 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_scenario_food_and_home() {
        let mut ledger = Ledger::new();
        ledger.push(expense("Lunch", 5000, "Food"));
        ledger.push(expense("Bulbs", 3000, "Home"));

        let report =
            BudgetReport::generate(&ledger, Money::from_sen(20000), date(2024, 1, 15)).unwrap();

        assert_eq!(report.category_totals.len(), 2);
        assert_eq!(report.category_totals[0].category, Category::Food);
        assert_eq!(report.category_totals[0].total.sen(), 5000);
        assert_eq!(report.category_totals[1].category, Category::Home);
        assert_eq!(report.category_totals[1].total.sen(), 3000);
        assert_eq!(report.total_spent.sen(), 8000);
        assert_eq!(report.remaining_budget.sen(), 12000);
    }

    #[test]
    fn test_category_totals_sum_to_total_spent() {
        let mut ledger = Ledger::new();
        ledger.push(expense("a", 1111, "Food"));
        ledger.push(expense("b", 2222, "Home"));
        ledger.push(expense("c", 3333, "Food"));
        ledger.push(expense("d", 4444, "Travel"));

        let report =
            BudgetReport::generate(&ledger, Money::from_sen(100000), date(2024, 1, 15)).unwrap();

        let sum: Money = report.category_totals.iter().map(|t| t.total).sum();
        assert_eq!(sum, report.total_spent);
        assert_eq!(
            report.remaining_budget,
            Money::from_sen(100000) - report.total_spent
        );
    }

    #[test]
    fn test_category_order_is_first_appearance() {
        let mut ledger = Ledger::new();
        ledger.push(expense("a", 100, "Study"));
        ledger.push(expense("b", 200, "Food"));
        ledger.push(expense("c", 300, "Study"));

        let report =
            BudgetReport::generate(&ledger, Money::from_sen(10000), date(2024, 1, 15)).unwrap();

        assert_eq!(report.category_totals[0].category, Category::Study);
        assert_eq!(report.category_totals[0].total.sen(), 400);
        assert_eq!(report.category_totals[1].category, Category::Food);
    }

    #[test]
    fn test_last_day_of_month_fails() {
        let ledger = Ledger::new();

        let err = BudgetReport::generate(&ledger, Money::from_sen(10000), date(2024, 1, 31))
            .unwrap_err();
        assert!(matches!(err, SpendError::NoRemainingDays));

        // Leap-year February
        let err = BudgetReport::generate(&ledger, Money::from_sen(10000), date(2024, 2, 29))
            .unwrap_err();
        assert!(matches!(err, SpendError::NoRemainingDays));
    }

    #[test]
    fn test_remaining_days_and_daily_budget() {
        let mut ledger = Ledger::new();
        ledger.push(expense("a", 8000, "Food"));

        // January 15: 31 days in month, 16 remaining
        let report =
            BudgetReport::generate(&ledger, Money::from_sen(20000), date(2024, 1, 15)).unwrap();

        assert_eq!(report.days_in_month, 31);
        assert_eq!(report.remaining_days, 16);
        assert_eq!(report.daily_budget.sen(), 12000 / 16);
    }

    #[test]
    fn test_running_balances_are_partial_sums() {
        let mut ledger = Ledger::new();
        ledger.push(expense("a", 3000, "Food"));
        ledger.push(expense("b", 2000, "Home"));

        let report =
            BudgetReport::generate(&ledger, Money::from_sen(10000), date(2024, 1, 15)).unwrap();

        assert_eq!(report.running_balances.len(), 2);
        assert_eq!(report.running_balances[0].balance_after.sen(), 7000);
        assert_eq!(report.running_balances[1].balance_after.sen(), 5000);
        assert_eq!(
            report.running_balances[1].balance_after,
            report.remaining_budget
        );
    }

    #[test]
    fn test_exceeded_trips_past_half_budget() {
        let budget = Money::from_sen(10000);

        // Spent 40% of budget: 4000 > 6000 is false
        let mut under = Ledger::new();
        under.push(expense("a", 4000, "Food"));
        let report = BudgetReport::generate(&under, budget, date(2024, 1, 15)).unwrap();
        assert!(!report.exceeded);

        // Spent exactly half: 5000 > 5000 is false
        let mut half = Ledger::new();
        half.push(expense("a", 5000, "Food"));
        let report = BudgetReport::generate(&half, budget, date(2024, 1, 15)).unwrap();
        assert!(!report.exceeded);

        // Spent 60%: 6000 > 4000 trips the flag even though the budget
        // itself is not exhausted
        let mut over_half = Ledger::new();
        over_half.push(expense("a", 6000, "Food"));
        let report = BudgetReport::generate(&over_half, budget, date(2024, 1, 15)).unwrap();
        assert!(report.exceeded);
    }

    #[test]
    fn test_empty_ledger_report() {
        let ledger = Ledger::new();
        let report =
            BudgetReport::generate(&ledger, Money::from_sen(20000), date(2024, 1, 15)).unwrap();

        assert!(report.category_totals.is_empty());
        assert!(report.running_balances.is_empty());
        assert_eq!(report.total_spent, Money::zero());
        assert_eq!(report.remaining_budget.sen(), 20000);
        assert!(!report.exceeded);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(date(2024, 1, 10)), 31);
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2025, 2, 10)), 28);
        assert_eq!(days_in_month(date(2024, 4, 10)), 30);
        assert_eq!(days_in_month(date(2024, 12, 10)), 31);
    }
}
