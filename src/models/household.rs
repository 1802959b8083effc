//! Household classification
//!
//! Only couples have a second earner and a bill-split rule, so those fields
//! live inside the [`Household::Couple`] variant instead of beside it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Household type as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HouseholdType {
    #[default]
    Individual,
    Couple,
    Student,
}

impl fmt::Display for HouseholdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual => write!(f, "Individual"),
            Self::Couple => write!(f, "Couple"),
            Self::Student => write!(f, "Student"),
        }
    }
}

/// How a couple divides shared bills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitRule {
    /// Each person pays half
    Equal,
    /// Each person pays in proportion to their income
    #[default]
    Proportional,
}

impl fmt::Display for SplitRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::Proportional => write!(f, "proportional"),
        }
    }
}

/// Couple settings as they appear on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoupleSettings {
    pub split_rule: SplitRule,
}

/// Who the plan is for
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Household {
    #[default]
    Individual,
    Student,
    Couple {
        /// Partner's monthly income
        income_b: f64,
        /// `None` means the rule was never chosen; the engine treats that as proportional
        split_rule: Option<SplitRule>,
    },
}

impl Household {
    /// A couple with the given partner income and no explicit split rule
    pub fn couple(income_b: f64) -> Self {
        Self::Couple {
            income_b,
            split_rule: None,
        }
    }

    /// A couple with an explicit split rule
    pub fn couple_with_rule(income_b: f64, split_rule: SplitRule) -> Self {
        Self::Couple {
            income_b,
            split_rule: Some(split_rule),
        }
    }

    pub fn kind(&self) -> HouseholdType {
        match self {
            Self::Individual => HouseholdType::Individual,
            Self::Student => HouseholdType::Student,
            Self::Couple { .. } => HouseholdType::Couple,
        }
    }

    pub fn is_couple(&self) -> bool {
        matches!(self, Self::Couple { .. })
    }
}
