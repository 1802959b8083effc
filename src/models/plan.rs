//! Saved plan model
//!
//! A named snapshot of a [`BudgetInput`] kept in local storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PlanId;
use super::input::BudgetInput;

/// Name used when a plan is saved without one
pub const UNTITLED_PLAN: &str = "Untitled plan";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub id: PlanId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub data: BudgetInput,
}

impl SavedPlan {
    /// Snapshot `data` under `name`, stamped with the current time
    pub fn new(name: &str, data: BudgetInput) -> Self {
        let name = name.trim();
        Self {
            id: PlanId::new(),
            name: if name.is_empty() {
                UNTITLED_PLAN.to_string()
            } else {
                name.to_string()
            },
            created_at: Utc::now(),
            data,
        }
    }
}

impl fmt::Display for SavedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
