//! Where a command gets its plan from

use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetSplitResult};
use crate::models::BudgetInput;
use crate::share::{decode_plan, extract_share_data, MISSING_SHARE_DATA};
use crate::storage::{read_plan_file, Storage};
use crate::templates::{template, TemplateKey};

/// Plan source: a file, a template, a share link or a saved plan
#[derive(Args, Debug, Default, Clone)]
pub struct PlanSourceArgs {
    /// Plan file (JSON, or YAML with a .yaml/.yml extension)
    pub file: Option<PathBuf>,

    /// Start from a built-in template
    #[arg(short, long, value_enum, conflicts_with_all = ["file", "share", "saved"])]
    pub template: Option<TemplateKey>,

    /// Share link or bare share payload
    #[arg(short, long, conflicts_with_all = ["file", "saved"])]
    pub share: Option<String>,

    /// Saved plan id or name
    #[arg(long, conflicts_with = "file")]
    pub saved: Option<String>,
}

impl PlanSourceArgs {
    /// Load the plan, falling back to the configured default template
    pub fn resolve(&self, storage: &Storage, settings: &Settings) -> BudgetSplitResult<BudgetInput> {
        if let Some(path) = &self.file {
            return read_plan_file(path);
        }
        if let Some(key) = self.template {
            return Ok(template(key));
        }
        if let Some(link) = &self.share {
            return plan_from_share(link);
        }
        if let Some(query) = &self.saved {
            return Ok(storage.plans.find_required(query)?.data);
        }

        log::debug!("No plan source given, using template {}", settings.default_template);
        Ok(template(settings.default_template))
    }
}

/// Decode a share link or bare payload into a plan
pub fn plan_from_share(link: &str) -> BudgetSplitResult<BudgetInput> {
    let data = extract_share_data(link)
        .ok_or_else(|| BudgetError::InvalidShareData(MISSING_SHARE_DATA.into()))?;
    decode_plan(data)
}

/// Used by commands that insist on a template argument
pub fn default_template(settings: &Settings, key: Option<TemplateKey>) -> TemplateKey {
    key.unwrap_or(settings.default_template)
}
