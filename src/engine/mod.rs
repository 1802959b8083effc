//! Budget calculation engine
//!
//! [`calculate`] turns a [`BudgetInput`] into a [`BudgetResult`]. It is a pure
//! function: no I/O, no shared state, and it never fails. Amounts that are
//! negative or non-finite are normalized to zero before any arithmetic, so
//! the same input always yields a bit-identical result.
//!
//! # Example
//!
//! ```
//! use budget_split::engine::calculate;
//! use budget_split::models::{BudgetInput, Household, SavingsRule};
//!
//! let input = BudgetInput::new(Household::Individual, 10000.0)
//!     .with_bill("Rent", 4000.0)
//!     .with_category("Food", 2000.0)
//!     .with_savings(SavingsRule::percent(20.0));
//!
//! let result = calculate(&input);
//! assert_eq!(result.savings_amount, 2000.0);
//! assert_eq!(result.remaining_after_bills_and_savings, 4000.0);
//! assert_eq!(result.unallocated, 2000.0);
//! ```

pub mod buffer;
pub mod couple;
pub mod savings;

pub use buffer::{buffer_amount, is_buffer_name, BUFFER_CATEGORY_NAME};
pub use couple::split_bills;
pub use savings::compute_savings;

use crate::models::money::{normalize_amount, round2, saturate, sum_normalized};
use crate::models::{BudgetInput, BudgetResult, CategoryResult, Household, Warning};

/// Weeks in an average month (52 / 12, conventionally rounded)
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Calculate the monthly breakdown for `input`
pub fn calculate(input: &BudgetInput) -> BudgetResult {
    let income_a = normalize_amount(input.income_a);
    let couple = match input.household {
        Household::Couple {
            income_b,
            split_rule,
        } => Some((normalize_amount(income_b), split_rule.unwrap_or_default())),
        Household::Individual | Household::Student => None,
    };

    let total_income = saturate(income_a + couple.map_or(0.0, |(income_b, _)| income_b));
    let total_bills = sum_normalized(input.bills.iter().map(|b| b.amount));
    let savings_amount = compute_savings(total_income, &input.savings);
    let remaining = round2(saturate(total_income - total_bills - savings_amount));

    let total_category_budgets = sum_normalized(input.categories.iter().map(|c| c.amount));
    let unallocated = round2(saturate(remaining - total_category_budgets));

    let safe_to_spend_per_week =
        round2(saturate(remaining - buffer_amount(&input.categories)) / WEEKS_PER_MONTH);

    let mut warnings = Vec::new();
    if total_income <= 0.0 {
        warnings.push(Warning::NoIncome);
    }
    if total_bills > total_income {
        warnings.push(Warning::BillsExceedIncome);
    }
    if remaining < 0.0 {
        warnings.push(Warning::NegativeRemaining);
    }
    if unallocated < 0.0 {
        warnings.push(Warning::CategoriesExceedAvailable);
    }

    let couple = couple.map(|(income_b, rule)| {
        if income_a == 0.0 && income_b == 0.0 {
            warnings.push(Warning::BothIncomesZero);
        }
        split_bills(income_a, income_b, total_bills, rule)
    });

    BudgetResult {
        total_income: round2(total_income),
        total_bills: round2(total_bills),
        savings_amount: round2(savings_amount),
        total_category_budgets: round2(total_category_budgets),
        remaining_after_bills_and_savings: remaining,
        unallocated,
        safe_to_spend_per_week,
        category_results: input
            .categories
            .iter()
            .map(|c| CategoryResult {
                id: c.id.clone(),
                name: c.name.clone(),
                amount: round2(normalize_amount(c.amount)),
            })
            .collect(),
        couple,
        warnings,
    }
}
