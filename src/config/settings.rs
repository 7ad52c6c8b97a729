//! User settings for spend-cli
//!
//! Manages user preferences: the default monthly budget used by
//! non-interactive summaries and the currency symbol.

use serde::{Deserialize, Serialize};

use crate::error::SpendError;
use crate::models::Money;

use super::paths::SpendPaths;

/// User settings for spend-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default monthly budget, in sen; `None` until the user sets one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<Money>,

    /// Currency symbol used in printed output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "RM".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_budget: None,
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendPaths) -> Result<Self, SpendError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)
                .map_err(|e| SpendError::Io(format!("Failed to read settings: {}", e)))?;
            let settings: Settings = serde_json::from_str(&content)
                .map_err(|e| SpendError::Json(format!("Failed to parse settings: {}", e)))?;
            Ok(settings)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendPaths) -> Result<(), SpendError> {
        paths.ensure_directories()?;

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| SpendError::Json(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), content)
            .map_err(|e| SpendError::Io(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }
}
