//! Ledger file store
//!
//! Owns the on-disk representation of the ledger: one record per line,
//! `name,amount,category,timestamp`, comma-separated. Fields are written
//! verbatim with no quoting or escaping, so a name or category containing a
//! comma can never be decoded again; the encoder rejects such values instead
//! of writing them.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::{SpendError, SpendResult};
use crate::models::{Category, Expense, Ledger, Money};

use super::file_io::{append_line, write_lines_atomic};

/// Timestamp format used in ledger lines, second precision
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Store for one ledger file
///
/// Every operation goes back to the file: the ledger is loaded fresh at the
/// start of each mutating or reporting operation and rewritten in full on
/// mutation. There is no in-memory cache across operations.
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store bound to a ledger file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The ledger file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The sibling backup path (`<path>.backup`)
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".backup");
        PathBuf::from(name)
    }

    /// Read all records from the file
    ///
    /// Returns an empty ledger when the file does not exist. Fails with
    /// `MalformedRecord` on the first line that does not decode; nothing is
    /// skipped silently.
    pub fn load(&self) -> SpendResult<Ledger> {
        if !self.path.exists() {
            return Ok(Ledger::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            SpendError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let mut ledger = Ledger::new();
        for (index, line) in content.lines().enumerate() {
            ledger.push(decode_record(index + 1, line)?);
        }

        Ok(ledger)
    }

    /// Encode one record and append it to the end of the file
    ///
    /// Creates the file (and parent directory) if absent. Prior records are
    /// not rewritten.
    pub fn append(&self, expense: &Expense) -> SpendResult<()> {
        let line = encode_record(expense)?;
        append_line(&self.path, &line)
    }

    /// Atomically rewrite the whole file from the in-memory ledger, in order
    pub fn replace_all(&self, ledger: &Ledger) -> SpendResult<()> {
        let lines: Vec<String> = ledger
            .iter()
            .map(encode_record)
            .collect::<SpendResult<_>>()?;
        write_lines_atomic(&self.path, &lines)
    }

    /// Copy the current file to the sibling backup path
    ///
    /// Single-slot: an earlier backup is overwritten. Returns `None` without
    /// touching anything when there is no file to back up.
    pub fn snapshot(&self) -> SpendResult<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let backup = self.backup_path();
        fs::copy(&self.path, &backup).map_err(|e| {
            SpendError::Storage(format!(
                "Failed to back up {} to {}: {}",
                self.path.display(),
                backup.display(),
                e
            ))
        })?;

        Ok(Some(backup))
    }
}

/// Encode an expense as a ledger line
///
/// Fails with `Validation` if the record breaks an invariant or if the name
/// or category contains a comma or line break the format cannot represent.
pub fn encode_record(expense: &Expense) -> SpendResult<String> {
    expense.validate()?;

    for (field, value) in [("name", expense.name.as_str()), ("category", expense.category.label())] {
        if value.contains(',') {
            return Err(SpendError::Validation(format!(
                "Expense {} must not contain a comma: {:?}",
                field, value
            )));
        }
        if value.contains('\n') || value.contains('\r') {
            return Err(SpendError::Validation(format!(
                "Expense {} must not contain a line break: {:?}",
                field, value
            )));
        }
    }

    Ok(format!(
        "{},{},{},{}",
        expense.name,
        expense.amount,
        expense.category,
        expense.timestamp.format(TIMESTAMP_FORMAT)
    ))
}

/// Decode one ledger line into an expense
///
/// `line_number` is 1-based and is carried into the error for reporting.
pub fn decode_record(line_number: usize, line: &str) -> SpendResult<Expense> {
    let line = line.trim();

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Err(SpendError::malformed_record(
            line_number,
            line,
            format!("expected 4 comma-separated fields, found {}", fields.len()),
        ));
    }

    let name = fields[0];
    let amount = Money::parse(fields[1]).map_err(|e| {
        SpendError::malformed_record(line_number, line, format!("invalid amount: {}", e))
    })?;
    if !amount.is_positive() {
        return Err(SpendError::malformed_record(
            line_number,
            line,
            format!("amount must be positive, got {}", amount),
        ));
    }

    let category = Category::parse(fields[2]);
    let timestamp = NaiveDateTime::parse_from_str(fields[3], TIMESTAMP_FORMAT).map_err(|e| {
        SpendError::malformed_record(line_number, line, format!("invalid timestamp: {}", e))
    })?;

    Ok(Expense::with_timestamp(name, amount, category, timestamp))
}
