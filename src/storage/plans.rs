//! Saved plan repository
//!
//! All plans live as one JSON array under a single versioned key, newest
//! first. Reading never fails: a missing, unreadable or corrupt value is
//! treated as "no saved plans".

use crate::error::BudgetError;
use crate::models::{BudgetInput, PlanId, SavedPlan};

use super::provider::StorageProvider;

/// Storage key for the saved-plans list; bump the version if `SavedPlan` changes shape
pub const PLANS_STORAGE_KEY: &str = "budget-split:plans:v1";

/// Repository for saved plans on top of any [`StorageProvider`]
pub struct PlanRepository<S> {
    provider: S,
}

impl<S: StorageProvider> PlanRepository<S> {
    pub fn new(provider: S) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &S {
        &self.provider
    }

    /// All saved plans, newest first
    pub fn list(&self) -> Vec<SavedPlan> {
        let raw = match self.provider.get(PLANS_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Could not read saved plans, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<SavedPlan>>(&raw) {
            Ok(plans) => {
                log::debug!("Loaded {} saved plans", plans.len());
                plans
            }
            Err(e) => {
                log::warn!("Saved plans are corrupt, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Replace the stored list
    pub fn save_all(&self, plans: &[SavedPlan]) -> Result<(), BudgetError> {
        let raw = serde_json::to_string(plans)?;
        self.provider.set(PLANS_STORAGE_KEY, &raw)?;
        log::debug!("Stored {} saved plans", plans.len());
        Ok(())
    }

    /// Insert `plan` at the front and return the updated list
    pub fn add(&self, plan: SavedPlan) -> Result<Vec<SavedPlan>, BudgetError> {
        let mut plans = self.list();
        plans.insert(0, plan);
        self.save_all(&plans)?;
        Ok(plans)
    }

    /// Snapshot `data` as a new named plan and store it
    pub fn save_new(&self, name: &str, data: BudgetInput) -> Result<SavedPlan, BudgetError> {
        let plan = SavedPlan::new(name, data);
        self.add(plan.clone())?;
        Ok(plan)
    }

    /// Drop the plan with `id` (if any) and return the updated list
    pub fn remove(&self, id: PlanId) -> Result<Vec<SavedPlan>, BudgetError> {
        let mut plans = self.list();
        plans.retain(|p| p.id != id);
        self.save_all(&plans)?;
        Ok(plans)
    }

    pub fn get(&self, id: PlanId) -> Option<SavedPlan> {
        self.list().into_iter().find(|p| p.id == id)
    }

    /// Find a plan by full id, short id, or case-insensitive name
    ///
    /// Ids win over names; among name matches the newest plan wins.
    pub fn find(&self, query: &str) -> Option<SavedPlan> {
        let plans = self.list();
        if let Some(pos) = plans.iter().position(|p| p.id.matches(query)) {
            return plans.into_iter().nth(pos);
        }
        let wanted = query.trim().to_lowercase();
        plans.into_iter().find(|p| p.name.to_lowercase() == wanted)
    }

    /// Like [`find`](Self::find) but a miss is an error
    pub fn find_required(&self, query: &str) -> Result<SavedPlan, BudgetError> {
        self.find(query)
            .ok_or_else(|| BudgetError::plan_not_found(query))
    }
}
