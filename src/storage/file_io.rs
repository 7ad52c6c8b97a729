//! File I/O utilities with atomic writes
//!
//! Provides safe text-file operations that won't corrupt data on failure.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SpendError;

/// Append a single line to a file, creating the file and its parent
/// directory if absent
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), SpendError> {
    let path = path.as_ref();

    ensure_parent_dir(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SpendError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    writeln!(file, "{}", line)
        .map_err(|e| SpendError::Storage(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(())
}

/// Rewrite a file atomically from a sequence of lines (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at
/// all, preventing corruption on crashes or power failures.
pub fn write_lines_atomic<P, I, S>(path: P, lines: I) -> Result<(), SpendError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    ensure_parent_dir(path)?;

    // Temp file in the same directory (important for atomic rename)
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| SpendError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| SpendError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| SpendError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SpendError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        SpendError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<(), SpendError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SpendError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}
