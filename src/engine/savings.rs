//! Savings target

use crate::models::money::{clamp_finite, normalize_amount, round2, saturate};
use crate::models::{SavingsMode, SavingsRule};

/// Monthly savings for `rule` given the household's total income
///
/// A fixed amount is floored at zero. A percentage is clamped to `0..=100`
/// before it is applied.
pub fn compute_savings(total_income: f64, rule: &SavingsRule) -> f64 {
    match rule.mode {
        SavingsMode::Fixed => normalize_amount(rule.value),
        SavingsMode::Percent => {
            let pct = clamp_finite(rule.value, 0.0, 100.0);
            let amount = total_income * pct / 100.0;
            if amount.is_finite() {
                round2(amount)
            } else {
                round2(saturate(total_income / 100.0 * pct))
            }
        }
    }
}
