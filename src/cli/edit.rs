//! Plan file editing commands
//!
//! Each command reads a plan file, changes it, and writes it back in the same
//! format.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::error::{BudgetError, BudgetSplitResult};
use crate::models::{BudgetInput, Household, LineItemPatch, SavingsRule, SplitRule};
use crate::storage::{read_plan_file, write_plan_file};

/// Subcommands shared by `bill` and `category`
#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// Append an item
    Add {
        /// Plan file to edit
        file: PathBuf,
        /// Item name
        name: String,
        /// Monthly amount
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },

    /// Change an item's name or amount
    Set {
        /// Plan file to edit
        file: PathBuf,
        /// Item id or name
        item: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<f64>,
    },

    /// Remove an item
    #[command(alias = "rm")]
    Remove {
        /// Plan file to edit
        file: PathBuf,
        /// Item id or name
        item: String,
    },
}

/// Which list an [`ItemCommands`] operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Bill,
    Category,
}

impl ItemKind {
    fn label(&self) -> &'static str {
        match self {
            Self::Bill => "bill",
            Self::Category => "category",
        }
    }

    fn not_found(&self, query: &str) -> BudgetError {
        match self {
            Self::Bill => BudgetError::bill_not_found(query),
            Self::Category => BudgetError::category_not_found(query),
        }
    }

    fn resolve_id(&self, plan: &BudgetInput, query: &str) -> BudgetSplitResult<String> {
        let found = match self {
            Self::Bill => plan.find_bill(query),
            Self::Category => plan.find_category(query),
        };
        found
            .map(|item| item.id.clone())
            .ok_or_else(|| self.not_found(query))
    }
}

/// Handle a bill or category command
pub fn handle_item_command(kind: ItemKind, cmd: ItemCommands) -> BudgetSplitResult<()> {
    match cmd {
        ItemCommands::Add { file, name, amount } => {
            let mut plan = read_plan_file(&file)?;
            let id = match kind {
                ItemKind::Bill => plan.add_bill(&name, amount),
                ItemKind::Category => plan.add_category(&name, amount),
            };
            write_plan_file(&file, &plan)?;
            println!("Added {} '{}' ({})", kind.label(), name, id);
        }
        ItemCommands::Set {
            file,
            item,
            name,
            amount,
        } => {
            let patch = LineItemPatch { name, amount };
            if patch.is_empty() {
                return Err(BudgetError::Validation(
                    "Nothing to change: pass --name and/or --amount".into(),
                ));
            }

            let mut plan = read_plan_file(&file)?;
            let id = kind.resolve_id(&plan, &item)?;
            match kind {
                ItemKind::Bill => plan.update_bill(&id, patch),
                ItemKind::Category => plan.update_category(&id, patch),
            };
            write_plan_file(&file, &plan)?;
            println!("Updated {} {}", kind.label(), id);
        }
        ItemCommands::Remove { file, item } => {
            let mut plan = read_plan_file(&file)?;
            let id = kind.resolve_id(&plan, &item)?;
            match kind {
                ItemKind::Bill => plan.remove_bill(&id),
                ItemKind::Category => plan.remove_category(&id),
            };
            write_plan_file(&file, &plan)?;
            println!("Removed {} {}", kind.label(), id);
        }
    }

    Ok(())
}

/// Household type accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HouseholdArg {
    Individual,
    Couple,
    Student,
}

/// Split rule accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SplitArg {
    Equal,
    Proportional,
}

impl From<SplitArg> for SplitRule {
    fn from(arg: SplitArg) -> Self {
        match arg {
            SplitArg::Equal => SplitRule::Equal,
            SplitArg::Proportional => SplitRule::Proportional,
        }
    }
}

/// Arguments of the `set` command
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Plan file to edit
    pub file: PathBuf,

    /// Household type
    #[arg(long, value_enum)]
    pub household: Option<HouseholdArg>,

    /// Primary earner's monthly income
    #[arg(long, allow_hyphen_values = true)]
    pub income_a: Option<f64>,

    /// Partner's monthly income (couples only)
    #[arg(long, allow_hyphen_values = true)]
    pub income_b: Option<f64>,

    /// Couple bill-split rule
    #[arg(long, value_enum)]
    pub split: Option<SplitArg>,

    /// Save a fixed amount each month
    #[arg(long, conflicts_with = "savings_percent", allow_hyphen_values = true)]
    pub savings_fixed: Option<f64>,

    /// Save a percentage of total income each month
    #[arg(long, allow_hyphen_values = true)]
    pub savings_percent: Option<f64>,
}

/// Apply `args` to `plan`
pub fn apply_settings(plan: &mut BudgetInput, args: &SetArgs) -> BudgetSplitResult<()> {
    let (current_b, current_rule) = match plan.household {
        Household::Couple {
            income_b,
            split_rule,
        } => (Some(income_b), split_rule),
        _ => (None, None),
    };

    let wants_couple = match args.household {
        Some(HouseholdArg::Couple) => true,
        Some(_) => false,
        None => plan.household.is_couple(),
    };

    if !wants_couple && (args.income_b.is_some() || args.split.is_some()) {
        return Err(BudgetError::Validation(
            "--income-b and --split only apply to couple households".into(),
        ));
    }

    plan.household = match args.household {
        Some(HouseholdArg::Individual) => Household::Individual,
        Some(HouseholdArg::Student) => Household::Student,
        _ if !wants_couple => plan.household,
        _ => Household::Couple {
            income_b: args.income_b.or(current_b).unwrap_or(0.0),
            split_rule: args.split.map(SplitRule::from).or(current_rule),
        },
    };

    if let Some(income_a) = args.income_a {
        plan.income_a = income_a;
    }
    if let Some(amount) = args.savings_fixed {
        plan.savings = SavingsRule::fixed(amount);
    }
    if let Some(pct) = args.savings_percent {
        plan.savings = SavingsRule::percent(pct);
    }

    Ok(())
}

/// Handle the set command
pub fn handle_set_command(args: SetArgs) -> BudgetSplitResult<()> {
    let mut plan = read_plan_file(&args.file)?;
    apply_settings(&mut plan, &args)?;
    write_plan_file(&args.file, &plan)?;
    println!("Updated {}", args.file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SetArgs {
        SetArgs {
            file: PathBuf::from("plan.json"),
            household: None,
            income_a: None,
            income_b: None,
            split: None,
            savings_fixed: None,
            savings_percent: None,
        }
    }

    #[test]
    fn test_switch_to_couple() {
        let mut plan = BudgetInput::new(Household::Individual, 1000.0);
        let args = SetArgs {
            household: Some(HouseholdArg::Couple),
            income_b: Some(500.0),
            split: Some(SplitArg::Equal),
            ..args()
        };

        apply_settings(&mut plan, &args).unwrap();
        assert_eq!(plan.household, Household::couple_with_rule(500.0, SplitRule::Equal));
    }

    #[test]
    fn test_existing_couple_keeps_partner_income() {
        let mut plan = BudgetInput::new(Household::couple(700.0), 1000.0);
        let args = SetArgs {
            split: Some(SplitArg::Proportional),
            income_a: Some(1200.0),
            ..args()
        };

        apply_settings(&mut plan, &args).unwrap();
        assert_eq!(
            plan.household,
            Household::couple_with_rule(700.0, SplitRule::Proportional)
        );
        assert_eq!(plan.income_a, 1200.0);
    }

    #[test]
    fn test_switch_away_from_couple() {
        let mut plan = BudgetInput::new(Household::couple(700.0), 1000.0);
        let args = SetArgs {
            household: Some(HouseholdArg::Student),
            savings_percent: Some(10.0),
            ..args()
        };

        apply_settings(&mut plan, &args).unwrap();
        assert_eq!(plan.household, Household::Student);
        assert_eq!(plan.savings, SavingsRule::percent(10.0));
    }

    #[test]
    fn test_partner_income_requires_couple() {
        let mut plan = BudgetInput::new(Household::Individual, 1000.0);
        let args = SetArgs {
            income_b: Some(10.0),
            ..args()
        };
        assert!(matches!(
            apply_settings(&mut plan, &args),
            Err(BudgetError::Validation(_))
        ));
    }
}
