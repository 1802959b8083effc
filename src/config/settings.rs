//! User settings for budget-split
//!
//! Display preferences and the defaults the CLI falls back to when a command
//! does not spell them out.

use serde::{Deserialize, Serialize};

use super::paths::BudgetSplitPaths;
use crate::error::BudgetError;
use crate::storage::write_json_atomic;
use crate::templates::TemplateKey;

/// User settings for budget-split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol appended to formatted amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Origin used when building share links
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// Template used by `calc` when no plan source is given
    #[serde(default)]
    pub default_template: TemplateKey,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "kr".to_string()
}

fn default_share_base_url() -> String {
    "https://budget-split.app".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            share_base_url: default_share_base_url(),
            default_template: TemplateKey::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetSplitPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetSplitPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
