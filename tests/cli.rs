//! End-to-end tests driving the compiled `spend` binary
//!
//! Each test points SPEND_CLI_DATA_DIR at its own temp directory so sessions
//! never share state.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spend(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spend").unwrap();
    cmd.env("SPEND_CLI_DATA_DIR", data_dir.path());
    cmd
}

fn ledger_path(data_dir: &TempDir) -> std::path::PathBuf {
    data_dir.path().join("data").join("expenses.csv")
}

#[test]
fn add_then_list() {
    let data_dir = TempDir::new().unwrap();

    spend(&data_dir)
        .args(["add", "Lunch", "12.50", "--date", "2024-01-10 12:00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved Lunch for RM12.50"));

    spend(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. 2024-01-10 12:00:00 - Lunch: RM12.50, Category: Food",
        ));

    let content = std::fs::read_to_string(ledger_path(&data_dir)).unwrap();
    assert_eq!(content, "Lunch,12.50,Food,2024-01-10 12:00:00\n");
}

#[test]
fn list_empty_ledger() {
    let data_dir = TempDir::new().unwrap();

    spend(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn summary_reports_totals_and_daily_budget() {
    let data_dir = TempDir::new().unwrap();

    spend(&data_dir)
        .args(["add", "Lunch", "50", "--date", "2024-01-10 12:00:00"])
        .assert()
        .success();
    spend(&data_dir)
        .args([
            "add", "Bulbs", "30", "--category", "Home", "--date", "2024-01-11 09:30:00",
        ])
        .assert()
        .success();

    spend(&data_dir)
        .args(["summary", "--budget", "200", "--as-of", "2024-01-15"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Food: RM50.00")
                .and(predicate::str::contains("Home: RM30.00"))
                .and(predicate::str::contains("Total Spent: RM80.00"))
                .and(predicate::str::contains("Budget Remaining: RM120.00"))
                .and(predicate::str::contains(
                    "Remaining days in the current month: 16",
                ))
                .and(predicate::str::contains("Budget Per Day: RM7.50"))
                .and(predicate::str::contains(
                    "Budget left after this expense: RM150.00",
                )),
        );
}

#[test]
fn summary_on_last_day_of_month_fails() {
    let data_dir = TempDir::new().unwrap();

    spend(&data_dir)
        .args(["add", "Lunch", "50", "--date", "2024-01-10 12:00:00"])
        .assert()
        .success();

    spend(&data_dir)
        .args(["summary", "--budget", "200", "--as-of", "2024-01-31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No days remaining"));
}

#[test]
fn summary_without_budget_fails() {
    let data_dir = TempDir::new().unwrap();

    spend(&data_dir)
        .args(["add", "Lunch", "50"])
        .assert()
        .success();

    spend(&data_dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No monthly budget configured"));
}

#[test]
fn delete_first_of_two() {
    let data_dir = TempDir::new().unwrap();

    spend(&data_dir)
        .args(["add", "Lunch", "12.50", "--date", "2024-01-10 12:00:00"])
        .assert()
        .success();
    spend(&data_dir)
        .args([
            "add", "Rent", "900", "--category", "Home", "--date", "2024-01-01 08:00:00",
        ])
        .assert()
        .success();

    spend(&data_dir).args(["delete", "1"]).assert().success();

    let content = std::fs::read_to_string(ledger_path(&data_dir)).unwrap();
    assert_eq!(content, "Rent,900.00,Home,2024-01-01 08:00:00\n");
}

#[test]
fn delete_out_of_range_position_fails() {
    let data_dir = TempDir::new().unwrap();

    spend(&data_dir)
        .args(["add", "Lunch", "12.50"])
        .assert()
        .success();

    spend(&data_dir)
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found"));
}

#[test]
fn edit_rewrites_record_in_place() {
    let data_dir = TempDir::new().unwrap();

    spend(&data_dir)
        .args(["add", "Lunch", "12.50", "--date", "2024-01-10 12:00:00"])
        .assert()
        .success();

    spend(&data_dir)
        .args(["edit", "1", "Dinner", "20", "--category", "Study"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense 1 updated."));

    let content = std::fs::read_to_string(ledger_path(&data_dir)).unwrap();
    assert_eq!(content, "Dinner,20.00,Study,2024-01-10 12:00:00\n");
}

#[test]
fn malformed_ledger_line_fails_load_with_line_number() {
    let data_dir = TempDir::new().unwrap();

    spend(&data_dir)
        .args(["add", "Lunch", "12.50", "--date", "2024-01-10 12:00:00"])
        .assert()
        .success();

    // Corrupt the second line by hand
    let path = ledger_path(&data_dir);
    let mut content = std::fs::read_to_string(&path).unwrap();
    content.push_str("Lunch,abc,Food,2024-01-01 12:00:00\n");
    std::fs::write(&path, content).unwrap();

    spend(&data_dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Malformed record on line 2")
                .and(predicate::str::contains("invalid amount")),
        );
}

#[test]
fn startup_snapshot_creates_backup() {
    let data_dir = TempDir::new().unwrap();

    spend(&data_dir)
        .args(["add", "Lunch", "12.50", "--date", "2024-01-10 12:00:00"])
        .assert()
        .success();

    // The next session backs up the file before mutating it
    spend(&data_dir)
        .args(["add", "Rent", "900", "--date", "2024-01-11 08:00:00"])
        .assert()
        .success();

    let backup = data_dir
        .path()
        .join("data")
        .join("expenses.csv.backup");
    let backup_content = std::fs::read_to_string(backup).unwrap();
    assert_eq!(backup_content, "Lunch,12.50,Food,2024-01-10 12:00:00\n");
}

#[test]
fn comma_in_name_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    spend(&data_dir)
        .args(["add", "Fish, chips", "9.90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not contain a comma"));

    assert!(!ledger_path(&data_dir).exists());
}

#[test]
fn config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    spend(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("expenses.csv")
                .and(predicate::str::contains("Monthly budget: (not set)")),
        );
}
