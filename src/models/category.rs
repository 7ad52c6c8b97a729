//! Expense categories
//!
//! The tracker ships a fixed set of categories (Food, Home, School, Study)
//! for the interactive picker, but the ledger file does not enforce the set:
//! any label found on disk is carried verbatim as a custom category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category labels offered by the interactive picker, in menu order
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Food", "Home", "School", "Study"];

/// An expense category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Home,
    School,
    Study,
    /// Any other label, preserved verbatim
    Other(String),
}

impl Category {
    /// Parse a category label
    ///
    /// Known labels map to their fixed variant; anything else becomes
    /// `Other` so that round-tripping through the ledger file never alters
    /// a label.
    pub fn parse(label: &str) -> Self {
        match label {
            "Food" => Self::Food,
            "Home" => Self::Home,
            "School" => Self::School,
            "Study" => Self::Study,
            other => Self::Other(other.to_string()),
        }
    }

    /// The label text as written to the ledger file
    pub fn label(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Home => "Home",
            Self::School => "School",
            Self::Study => "Study",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}
