//! Display formatting for terminal output
//!
//! Renders breakdowns and saved-plan listings for the CLI.

pub mod breakdown;
pub mod report;

pub use breakdown::{format_breakdown, format_plan_list};
