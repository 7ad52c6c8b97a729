//! Flat-file storage layer
//!
//! The ledger lives in a plain text file, one comma-separated record per
//! line. This module owns the record codec, atomic rewrites, and the
//! single-slot startup backup.

pub mod file_io;
pub mod ledger_file;

pub use ledger_file::{LedgerStore, TIMESTAMP_FORMAT};
