//! spend-cli - Command-line personal expense tracker
//!
//! This library provides the core functionality for the spend-cli expense
//! tracker: a flat-file expense ledger and a monthly budget summarizer. The
//! binary in `main.rs` is a thin clap shell over it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, the ledger)
//! - `storage`: Flat-file ledger storage with atomic rewrites and backups
//! - `reports`: Budget summarization
//! - `cli`: Command handlers and the interactive menu loop
//!
//! The ledger is loaded fresh from disk at the start of every mutating or
//! reporting operation and written back in full on every mutation; the core
//! never touches a terminal.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{SpendError, SpendResult};
