//! Configuration module for budget-split
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetSplitPaths;
pub use settings::Settings;
