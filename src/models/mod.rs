//! Core data models for budget-split
//!
//! Plan inputs, calculated results, saved plans and the money helpers they
//! share.

pub mod household;
pub mod ids;
pub mod input;
pub mod money;
pub mod plan;
pub mod result;

pub use household::{CoupleSettings, Household, HouseholdType, SplitRule};
pub use ids::{new_item_id, PlanId};
pub use input::{BudgetInput, LineItem, LineItemPatch, SavingsMode, SavingsRule};
pub use plan::SavedPlan;
pub use result::{
    BudgetResult, CategoryResult, CoupleBreakdown, CoupleContribution, Person, Warning,
};
