//! Calculated budget breakdown
//!
//! A [`BudgetResult`] is rebuilt from scratch on every calculation and has no
//! identity of its own. All monetary fields are rounded to two decimals.

use serde::{Serialize, Serializer};
use std::fmt;

use super::household::SplitRule;

/// One category echoed back with its normalized amount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub id: String,
    pub name: String,
    pub amount: f64,
}

/// Member of a couple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Person {
    A,
    B,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// What one person should pay toward shared bills
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoupleContribution {
    pub person: Person,
    pub income: f64,
    /// Share of the household income, 0..1
    pub income_share: f64,
    pub fair_bill_contribution: f64,
}

/// Bill-split fairness for a couple (bills only; savings and categories are not split)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoupleBreakdown {
    pub total_income_a: f64,
    pub total_income_b: f64,
    pub split_rule: SplitRule,
    /// Person A first, then person B
    pub contributions: [CoupleContribution; 2],
}

impl CoupleBreakdown {
    pub fn person_a(&self) -> &CoupleContribution {
        &self.contributions[0]
    }

    pub fn person_b(&self) -> &CoupleContribution {
        &self.contributions[1]
    }
}

/// Advisory produced by a calculation
///
/// Warnings never stop a calculation. They serialize as their message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    /// Total income is zero
    NoIncome,
    /// Bills alone are larger than income
    BillsExceedIncome,
    /// Bills plus savings are larger than income
    NegativeRemaining,
    /// Category budgets are larger than what's left after bills and savings
    CategoriesExceedAvailable,
    /// Couple household where neither person has income
    BothIncomesZero,
}

impl Warning {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoIncome => "Income is 0. Add income to calculate a plan.",
            Self::BillsExceedIncome => {
                "Bills exceed income. You're in a deficit before savings/categories."
            }
            Self::NegativeRemaining => "After bills and savings, you have negative remaining.",
            Self::CategoriesExceedAvailable => {
                "Your category budgets exceed what's available after bills and savings."
            }
            Self::BothIncomesZero => "Both incomes are 0 for couple mode.",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Warning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// The full monthly breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResult {
    pub total_income: f64,
    pub total_bills: f64,
    pub savings_amount: f64,
    pub total_category_budgets: f64,
    /// Money left for categories and anything else
    pub remaining_after_bills_and_savings: f64,
    /// Remaining minus category budgets; negative means over-committed
    pub unallocated: f64,
    /// (remaining - buffer) spread over the weeks of a month
    pub safe_to_spend_per_week: f64,
    pub category_results: Vec<CategoryResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub couple: Option<CoupleBreakdown>,
    pub warnings: Vec<Warning>,
}

impl BudgetResult {
    pub fn has_warning(&self, warning: Warning) -> bool {
        self.warnings.contains(&warning)
    }
}
