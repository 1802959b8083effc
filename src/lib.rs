//! budget-split - household budget breakdowns with fair bill splitting
//!
//! This library turns a small monthly plan (incomes, bills, savings rule and
//! discretionary categories) into a breakdown: what's left after bills and
//! savings, what's unallocated, a weekly safe-to-spend figure, and for
//! couples a fair split of the shared bills.
//!
//! # Architecture
//!
//! - `engine`: the pure calculation (`calculate`)
//! - `models`: plan inputs, results, saved plans, money helpers
//! - `share`: plan <-> URL-safe text encoding for share links
//! - `storage`: saved plans behind a key-value storage provider
//! - `templates`: starter plans
//! - `config`: path resolution and user settings
//! - `display` / `cli`: terminal front end
//!
//! # Example
//!
//! ```
//! use budget_split::engine::calculate;
//! use budget_split::templates::{template, TemplateKey};
//!
//! let result = calculate(&template(TemplateKey::Couple));
//! assert!(result.couple.is_some());
//! assert!(result.warnings.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod share;
pub mod storage;
pub mod templates;

pub use engine::calculate;
pub use error::{BudgetError, BudgetSplitResult};
