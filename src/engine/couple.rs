//! Couple bill-split fairness
//!
//! Only shared bills are split. Shares are rounded independently, so the two
//! displayed shares (and contributions) may be off from 100% / total bills by
//! a cent; no remainder is redistributed.

use crate::models::money::round2;
use crate::models::{CoupleBreakdown, CoupleContribution, Person, SplitRule};

/// Split `total_bills` between two normalized incomes under `rule`
pub fn split_bills(
    income_a: f64,
    income_b: f64,
    total_bills: f64,
    rule: SplitRule,
) -> CoupleBreakdown {
    let (share_a, share_b) = match rule {
        SplitRule::Equal => (0.5, 0.5),
        SplitRule::Proportional => proportional_shares(income_a, income_b),
    };

    CoupleBreakdown {
        total_income_a: round2(income_a),
        total_income_b: round2(income_b),
        split_rule: rule,
        contributions: [
            contribution(Person::A, income_a, share_a, total_bills),
            contribution(Person::B, income_b, share_b, total_bills),
        ],
    }
}

/// Income shares, falling back to an even split when both incomes are zero
fn proportional_shares(income_a: f64, income_b: f64) -> (f64, f64) {
    // Halving keeps the ratio when the plain sum would overflow
    let (a, b) = if (income_a + income_b).is_finite() {
        (income_a, income_b)
    } else {
        (income_a / 2.0, income_b / 2.0)
    };
    let denom = a + b;
    if denom > 0.0 {
        (a / denom, b / denom)
    } else {
        (0.5, 0.5)
    }
}

fn contribution(person: Person, income: f64, share: f64, total_bills: f64) -> CoupleContribution {
    CoupleContribution {
        person,
        income: round2(income),
        income_share: round2(share),
        fair_bill_contribution: round2(total_bills * share),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huge_incomes_keep_their_ratio() {
        let split = split_bills(f64::MAX, f64::MAX / 3.0, 1000.0, SplitRule::Proportional);
        assert_eq!(split.person_a().income_share, 0.75);
        assert_eq!(split.person_b().income_share, 0.25);
        assert_eq!(split.person_a().fair_bill_contribution, 750.0);
    }

    #[test]
    fn test_equal_split_ignores_income() {
        let split = split_bills(50000.0, 5000.0, 3000.0, SplitRule::Equal);
        assert_eq!(split.person_a().income_share, 0.5);
        assert_eq!(split.person_b().income_share, 0.5);
        assert_eq!(split.person_a().fair_bill_contribution, 1500.0);
        assert_eq!(split.person_b().fair_bill_contribution, 1500.0);
    }

    #[test]
    fn test_proportional_split() {
        let split = split_bills(30000.0, 10000.0, 4000.0, SplitRule::Proportional);
        assert_eq!(split.person_a().person, Person::A);
        assert_eq!(split.person_a().income_share, 0.75);
        assert_eq!(split.person_b().income_share, 0.25);
        assert_eq!(split.person_a().fair_bill_contribution, 3000.0);
        assert_eq!(split.person_b().fair_bill_contribution, 1000.0);
        assert_eq!(split.total_income_a, 30000.0);
        assert_eq!(split.total_income_b, 10000.0);
    }

    #[test]
    fn test_proportional_zero_incomes_fall_back_to_half() {
        let split = split_bills(0.0, 0.0, 1001.0, SplitRule::Proportional);
        assert_eq!(split.person_a().income_share, 0.5);
        assert_eq!(split.person_b().income_share, 0.5);
        assert_eq!(split.person_a().fair_bill_contribution, 500.5);
        assert_eq!(split.person_b().fair_bill_contribution, 500.5);
    }

    #[test]
    fn test_independent_rounding_is_not_corrected() {
        // 1/3 and 2/3 round to 0.33 and 0.67; 100/3 rounds to 33.33 and 66.67
        let split = split_bills(1.0, 2.0, 100.0, SplitRule::Proportional);
        assert_eq!(split.person_a().income_share, 0.33);
        assert_eq!(split.person_b().income_share, 0.67);
        assert_eq!(split.person_a().fair_bill_contribution, 33.33);
        assert_eq!(split.person_b().fair_bill_contribution, 66.67);
    }

    #[test]
    fn test_one_earner_pays_everything() {
        let split = split_bills(20000.0, 0.0, 8000.0, SplitRule::Proportional);
        assert_eq!(split.person_a().fair_bill_contribution, 8000.0);
        assert_eq!(split.person_b().fair_bill_contribution, 0.0);
        assert_eq!(split.person_b().income_share, 0.0);
    }
}
