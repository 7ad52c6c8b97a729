//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the storage and report layers. All terminal
//! I/O for the application lives here.

pub mod expense;
pub mod interactive;
pub mod report;

pub use expense::{handle_add, handle_delete, handle_edit, handle_list};
pub use interactive::run_interactive;
pub use report::handle_summary;
