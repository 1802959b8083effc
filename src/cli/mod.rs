//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the engine and storage.

pub mod calc;
pub mod edit;
pub mod plan;
pub mod share;
pub mod source;
pub mod template;

pub use calc::{handle_calc_command, CalcArgs};
pub use edit::{handle_item_command, handle_set_command, ItemCommands, ItemKind, SetArgs};
pub use plan::{handle_plan_command, PlanCommands};
pub use share::{handle_share_command, ShareCommands};
pub use source::PlanSourceArgs;
pub use template::{handle_template_command, TemplateArgs};
