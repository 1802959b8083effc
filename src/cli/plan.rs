//! Saved plan CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_breakdown, format_plan_list};
use crate::engine::calculate;
use crate::error::BudgetSplitResult;
use crate::share::share_url;
use crate::storage::{write_plan_file, Storage};

use super::source::PlanSourceArgs;

/// Plan subcommands
#[derive(Subcommand, Debug)]
pub enum PlanCommands {
    /// List saved plans, newest first
    List,

    /// Save a plan under a name
    Save {
        /// Name for the saved plan
        name: String,
        #[command(flatten)]
        source: PlanSourceArgs,
    },

    /// Show the breakdown of a saved plan
    Show {
        /// Plan id, short id, or name
        plan: String,
    },

    /// Delete a saved plan
    #[command(alias = "rm")]
    Remove {
        /// Plan id, short id, or name
        plan: String,
    },

    /// Write a saved plan to a file (JSON, or YAML by extension)
    Export {
        /// Plan id, short id, or name
        plan: String,
        /// Destination file
        file: PathBuf,
    },

    /// Print a share link for a saved plan
    Share {
        /// Plan id, short id, or name
        plan: String,
    },
}

/// Handle a plan command
pub fn handle_plan_command(
    storage: &Storage,
    settings: &Settings,
    cmd: PlanCommands,
) -> BudgetSplitResult<()> {
    match cmd {
        PlanCommands::List => {
            print!("{}", format_plan_list(&storage.plans.list()));
        }
        PlanCommands::Save { name, source } => {
            let data = source.resolve(storage, settings)?;
            let plan = storage.plans.save_new(&name, data)?;
            println!("Saved plan '{}' ({})", plan.name, plan.id.short());
        }
        PlanCommands::Show { plan } => {
            let plan = storage.plans.find_required(&plan)?;
            let result = calculate(&plan.data);
            println!("{} ({})", plan.name, plan.id.short());
            println!("Saved {}", plan.created_at.format("%Y-%m-%d %H:%M UTC"));
            println!();
            print!(
                "{}",
                format_breakdown(&plan.data, &result, &settings.currency_symbol)
            );
        }
        PlanCommands::Remove { plan } => {
            let plan = storage.plans.find_required(&plan)?;
            let remaining = storage.plans.remove(plan.id)?;
            println!(
                "Removed plan '{}' ({} remaining)",
                plan.name,
                remaining.len()
            );
        }
        PlanCommands::Export { plan, file } => {
            let plan = storage.plans.find_required(&plan)?;
            write_plan_file(&file, &plan.data)?;
            println!("Exported '{}' to {}", plan.name, file.display());
        }
        PlanCommands::Share { plan } => {
            let plan = storage.plans.find_required(&plan)?;
            println!("{}", share_url(&settings.share_base_url, &plan.data)?);
        }
    }

    Ok(())
}
