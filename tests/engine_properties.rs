//! Property tests for the calculation engine and the share codec

use proptest::prelude::*;

use budget_split::engine::{calculate, WEEKS_PER_MONTH};
use budget_split::models::money::round2;
use budget_split::models::{BudgetInput, Household, LineItem, SavingsRule, SplitRule};
use budget_split::share::{decode_plan, encode_plan};

/// Any amount, including the kinds of junk a hand-edited plan can hold
fn any_amount() -> impl Strategy<Value = f64> + Clone {
    prop_oneof![
        8 => -1.0e7..1.0e7f64,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
        1 => Just(0.0),
    ]
}

/// Any finite amount, from everyday figures to the extremes of `f64`
fn finite_amount() -> impl Strategy<Value = f64> + Clone {
    prop_oneof![
        4 => -1.0e12..1.0e12f64,
        1 => prop::num::f64::NORMAL | prop::num::f64::ZERO,
    ]
}

fn items(amount: impl Strategy<Value = f64>) -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(
        ("[a-z0-9]{1,8}", "\\PC{0,12}", amount)
            .prop_map(|(id, name, amount)| LineItem::with_id(id, name, amount)),
        0..6,
    )
}

fn household(amount: impl Strategy<Value = f64> + Clone) -> impl Strategy<Value = Household> {
    prop_oneof![
        Just(Household::Individual),
        Just(Household::Student),
        amount.clone().prop_map(Household::couple),
        (amount, prop::bool::ANY).prop_map(|(b, equal)| {
            let rule = if equal {
                SplitRule::Equal
            } else {
                SplitRule::Proportional
            };
            Household::couple_with_rule(b, rule)
        }),
    ]
}

fn savings(amount: impl Strategy<Value = f64> + Clone) -> impl Strategy<Value = SavingsRule> {
    prop_oneof![
        amount.clone().prop_map(SavingsRule::fixed),
        amount.prop_map(SavingsRule::percent),
    ]
}

prop_compose! {
    fn any_input()(
        household in household(any_amount()),
        income_a in any_amount(),
        bills in items(any_amount()),
        categories in items(any_amount()),
        savings in savings(any_amount()),
    ) -> BudgetInput {
        BudgetInput { household, income_a, bills, categories, savings }
    }
}

prop_compose! {
    fn wire_input()(
        household in household(finite_amount()),
        income_a in finite_amount(),
        bills in items(finite_amount()),
        categories in items(finite_amount()),
        savings in savings(finite_amount()),
    ) -> BudgetInput {
        BudgetInput { household, income_a, bills, categories, savings }
    }
}

proptest! {
    #[test]
    fn totals_are_never_negative(input in any_input()) {
        let result = calculate(&input);
        prop_assert!(result.total_income >= 0.0);
        prop_assert!(result.total_bills >= 0.0);
        prop_assert!(result.total_category_budgets >= 0.0);
        prop_assert!(result.savings_amount >= 0.0);
        prop_assert!(result.remaining_after_bills_and_savings.is_finite());
        prop_assert!(result.safe_to_spend_per_week.is_finite());
        prop_assert!(result.category_results.iter().all(|c| c.amount >= 0.0));
    }

    #[test]
    fn conservation_within_rounding(input in any_input()) {
        // Each total is rounded on its own, so allow a cent per rounded term
        let r = calculate(&input);
        let remaining = r.total_income - r.total_bills - r.savings_amount;
        prop_assert!((r.remaining_after_bills_and_savings - remaining).abs() <= 0.02 + 1e-6);
        let unallocated = r.remaining_after_bills_and_savings - r.total_category_budgets;
        prop_assert!((r.unallocated - unallocated).abs() <= 0.02 + 1e-6);
    }

    #[test]
    fn bill_order_does_not_matter(input in any_input()) {
        let mut reversed = input.clone();
        reversed.bills.reverse();
        let a = calculate(&input).total_bills;
        let b = calculate(&reversed).total_bills;
        prop_assert!((a - b).abs() <= 0.01 + 1e-6);
    }

    #[test]
    fn weekly_spend_without_buffer(income in 0.0..1.0e6f64) {
        let input = BudgetInput::new(Household::Individual, income);
        let r = calculate(&input);
        prop_assert_eq!(
            r.safe_to_spend_per_week,
            round2(r.remaining_after_bills_and_savings / WEEKS_PER_MONTH)
        );
    }

    #[test]
    fn couple_breakdown_only_for_couples(input in any_input()) {
        let r = calculate(&input);
        prop_assert_eq!(r.couple.is_some(), input.household.is_couple());
        if let Some(couple) = r.couple {
            for c in &couple.contributions {
                prop_assert!((0.0..=1.0).contains(&c.income_share));
                prop_assert!(c.fair_bill_contribution >= 0.0);
            }
        }
    }

    #[test]
    fn calculate_is_idempotent(input in wire_input()) {
        prop_assert_eq!(calculate(&input), calculate(&input));
    }

    #[test]
    fn share_round_trip(input in wire_input()) {
        let encoded = encode_plan(&input).unwrap();
        let decoded = decode_plan(&encoded).unwrap();
        prop_assert_eq!(calculate(&decoded), calculate(&input));
        prop_assert_eq!(decoded, input);
    }

    #[test]
    fn decode_never_panics(text in "\\PC{0,64}") {
        let _ = decode_plan(&text);
    }
}
