//! The `calc` command

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_breakdown;
use crate::engine::calculate;
use crate::error::BudgetSplitResult;
use crate::storage::Storage;

use super::source::PlanSourceArgs;

#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub source: PlanSourceArgs,

    /// Print the result as JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

/// Handle the calc command
pub fn handle_calc_command(
    storage: &Storage,
    settings: &Settings,
    args: CalcArgs,
) -> BudgetSplitResult<()> {
    let input = args.source.resolve(storage, settings)?;
    let result = calculate(&input);
    log::debug!(
        "Calculated plan: income {}, unallocated {}, {} warnings",
        result.total_income,
        result.unallocated,
        result.warnings.len()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_breakdown(&input, &result, &settings.currency_symbol));
    }

    Ok(())
}
