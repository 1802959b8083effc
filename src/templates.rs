//! Starter plans
//!
//! Each call builds a fresh [`BudgetInput`] with newly minted item ids, so
//! two plans started from the same template never share ids.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;
use crate::models::{BudgetInput, Household, SavingsRule, SplitRule};

/// Available starter plans
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKey {
    /// Single earner, mid income
    #[default]
    Individual,
    /// Two earners sharing bills proportionally
    Couple,
    /// Student budget with a small fixed savings amount
    Student,
    /// High savings rate
    Aggressive,
    /// Tight budget with fixed savings
    #[serde(rename = "lowincome")]
    #[value(name = "lowincome")]
    LowIncome,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 5] = [
        Self::Individual,
        Self::Couple,
        Self::Student,
        Self::Aggressive,
        Self::LowIncome,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Couple => "couple",
            Self::Student => "student",
            Self::Aggressive => "aggressive",
            Self::LowIncome => "lowincome",
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKey {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| BudgetError::Validation(format!("Unknown template: {}", s)))
    }
}

/// Build a fresh plan from a template
pub fn template(key: TemplateKey) -> BudgetInput {
    match key {
        TemplateKey::Individual => BudgetInput::new(Household::Individual, 32000.0)
            .with_bill("Rent/Mortgage", 12000.0)
            .with_bill("Electricity/Heating", 900.0)
            .with_bill("Internet", 399.0)
            .with_bill("Phone", 300.0)
            .with_bill("Subscriptions", 200.0)
            .with_savings(SavingsRule::percent(15.0))
            .with_category("Food", 4500.0)
            .with_category("Transport", 900.0)
            .with_category("Fun", 1500.0)
            .with_category("Buffer", 1500.0),

        TemplateKey::Couple => BudgetInput::new(
            Household::couple_with_rule(24000.0, SplitRule::Proportional),
            28000.0,
        )
        .with_bill("Rent/Mortgage", 15000.0)
        .with_bill("Electricity/Heating", 1200.0)
        .with_bill("Internet", 399.0)
        .with_bill("Insurance", 500.0)
        .with_bill("Phone (shared)", 0.0)
        .with_savings(SavingsRule::percent(20.0))
        .with_category("Food", 6500.0)
        .with_category("Transport", 1800.0)
        .with_category("Fun", 2500.0)
        .with_category("Buffer", 2500.0),

        TemplateKey::Student => BudgetInput::new(Household::Student, 13000.0)
            .with_bill("Rent", 6500.0)
            .with_bill("Internet", 299.0)
            .with_bill("Phone", 250.0)
            .with_savings(SavingsRule::fixed(300.0))
            .with_category("Food", 2500.0)
            .with_category("Transport", 450.0)
            .with_category("Fun", 700.0)
            .with_category("Buffer", 500.0),

        TemplateKey::Aggressive => BudgetInput::new(Household::Individual, 35000.0)
            .with_bill("Rent", 12000.0)
            .with_bill("Utilities", 1500.0)
            .with_savings(SavingsRule::percent(30.0))
            .with_category("Food", 4000.0)
            .with_category("Transport", 800.0)
            .with_category("Fun", 800.0)
            .with_category("Buffer", 2000.0),

        TemplateKey::LowIncome => BudgetInput::new(Household::Individual, 15000.0)
            .with_bill("Rent", 7000.0)
            .with_bill("Utilities", 1200.0)
            .with_savings(SavingsRule::fixed(500.0))
            .with_category("Food", 2500.0)
            .with_category("Transport", 600.0)
            .with_category("Fun", 400.0)
            .with_category("Buffer", 500.0),
    }
}
