//! Terminal rendering of a budget breakdown

use std::fmt::Write;

use crate::engine::{is_buffer_name, WEEKS_PER_MONTH};
use crate::models::money::{clamp_finite, format_money, format_share, normalize_amount};
use crate::models::{BudgetInput, BudgetResult, SavedPlan, SavingsMode};

use super::report::{
    double_separator, format_bar, format_money_colored, left_align, right_align, separator,
    truncate,
};

const WIDTH: usize = 60;
const LABEL: usize = 36;
const AMOUNT: usize = 20;

fn row(out: &mut String, label: &str, amount: &str) {
    let _ = writeln!(
        out,
        "{}{}",
        left_align(&truncate(label, LABEL), LABEL),
        right_align(amount, AMOUNT)
    );
}

/// Render the full breakdown for `input`/`result` as plain text
pub fn format_breakdown(input: &BudgetInput, result: &BudgetResult, symbol: &str) -> String {
    let money = |amount: f64| format_money(amount, symbol);
    let mut out = String::new();

    let _ = writeln!(out, "Monthly budget ({})", input.household.kind());
    let _ = writeln!(out, "{}", double_separator(WIDTH));

    row(&mut out, "Income", &money(result.total_income));
    row(&mut out, "Bills", &money(result.total_bills));
    let savings_label = match input.savings.mode {
        SavingsMode::Fixed => "Savings (fixed)".to_string(),
        SavingsMode::Percent => format!(
            "Savings ({}% of income)",
            clamp_finite(input.savings.value, 0.0, 100.0)
        ),
    };
    row(&mut out, &savings_label, &money(result.savings_amount));
    let _ = writeln!(out, "{}", separator(WIDTH));
    row(
        &mut out,
        "Remaining after bills & savings",
        &format_money_colored(result.remaining_after_bills_and_savings, symbol),
    );
    row(&mut out, "Category budgets", &money(result.total_category_budgets));
    row(
        &mut out,
        "Unallocated",
        &format_money_colored(result.unallocated, symbol),
    );
    row(
        &mut out,
        &format!("Safe to spend per week (/{})", WEEKS_PER_MONTH),
        &format_money_colored(result.safe_to_spend_per_week, symbol),
    );

    if !input.bills.is_empty() {
        let _ = writeln!(out, "\nBills");
        let _ = writeln!(out, "{}", separator(WIDTH));
        for bill in &input.bills {
            row(&mut out, &format!("  {}", bill.name), &money(normalize_amount(bill.amount)));
        }
    }

    if !result.category_results.is_empty() {
        let max = result
            .category_results
            .iter()
            .map(|c| c.amount)
            .fold(0.0, f64::max);
        let _ = writeln!(out, "\nCategories");
        let _ = writeln!(out, "{}", separator(WIDTH));
        for category in &result.category_results {
            let marker = if is_buffer_name(&category.name) {
                " (reserve)"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "{}{} {}",
                left_align(&truncate(&format!("  {}{}", category.name, marker), 26), 26),
                right_align(&money(category.amount), 20),
                format_bar(category.amount, max, 12)
            );
        }
    }

    if let Some(couple) = &result.couple {
        let _ = writeln!(out, "\nBill split ({})", couple.split_rule);
        let _ = writeln!(out, "{}", separator(WIDTH));
        for c in &couple.contributions {
            row(
                &mut out,
                &format!(
                    "  Person {} ({} of income, {})",
                    c.person,
                    format_share(c.income_share),
                    money(c.income)
                ),
                &money(c.fair_bill_contribution),
            );
        }
    }

    if !result.warnings.is_empty() {
        let _ = writeln!(out, "\nWarnings");
        let _ = writeln!(out, "{}", separator(WIDTH));
        for warning in &result.warnings {
            let _ = writeln!(out, "  \x1b[33m!\x1b[0m {}", warning);
        }
    }

    out
}

/// Render saved plans as a table, newest first
pub fn format_plan_list(plans: &[SavedPlan]) -> String {
    if plans.is_empty() {
        return "No saved plans.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:14} {:28} {:12} {}",
        "ID", "Name", "Household", "Saved"
    );
    let _ = writeln!(out, "{}", separator(72));
    for plan in plans {
        let _ = writeln!(
            out,
            "{:14} {} {:12} {}",
            plan.id.short(),
            left_align(&truncate(&plan.name, 28), 28),
            plan.data.household.kind().to_string(),
            plan.created_at.format("%Y-%m-%d %H:%M")
        );
    }
    out
}
