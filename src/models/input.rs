//! Budget input model
//!
//! [`BudgetInput`] is what the user edits and what share links and saved
//! plans carry. The wire form is a flat camelCase record
//! (`householdType`, `incomeA`, `incomeB`, `bills`, `categories`, `savings`,
//! `couple`); in Rust the couple-only fields are folded into [`Household`].
//!
//! Amount fields deserialize leniently: a missing, `null`, or non-numeric
//! amount becomes `0`, and numeric strings such as `"1200"` are accepted.
//! Structural problems (unknown household type, `bills` not a list, no
//! `savings` rule) are still errors.

use serde::{Deserialize, Deserializer, Serialize};

use super::household::{CoupleSettings, Household, HouseholdType};
use super::ids::new_item_id;

/// Name given to bills added without one
pub const DEFAULT_BILL_NAME: &str = "New bill";

/// Name given to categories added without one
pub const DEFAULT_CATEGORY_NAME: &str = "New category";

/// A named monthly amount: a bill or a discretionary category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
}

impl LineItem {
    /// Create an item with a freshly minted id
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: new_item_id(),
            name: name.into(),
            amount,
        }
    }

    /// Create an item with a caller-chosen id
    pub fn with_id(id: impl Into<String>, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
        }
    }

    fn apply(&mut self, patch: LineItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
    }
}

/// Partial update for a bill or category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItemPatch {
    pub name: Option<String>,
    pub amount: Option<f64>,
}

impl LineItemPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            amount: None,
        }
    }

    pub fn amount(amount: f64) -> Self {
        Self {
            name: None,
            amount: Some(amount),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.amount.is_none()
    }
}

/// Whether savings are a fixed amount or a share of income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SavingsMode {
    #[default]
    Fixed,
    Percent,
}

/// Monthly savings target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SavingsRule {
    pub mode: SavingsMode,
    /// Amount for `Fixed`, percentage (0-100) of total income for `Percent`
    #[serde(default, deserialize_with = "lenient_amount")]
    pub value: f64,
}

impl SavingsRule {
    pub fn fixed(amount: f64) -> Self {
        Self {
            mode: SavingsMode::Fixed,
            value: amount,
        }
    }

    pub fn percent(pct: f64) -> Self {
        Self {
            mode: SavingsMode::Percent,
            value: pct,
        }
    }
}

/// Everything needed to calculate one month's budget
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "WireBudgetInput", into = "WireBudgetInput")]
pub struct BudgetInput {
    pub household: Household,
    /// Primary earner's monthly income
    pub income_a: f64,
    pub bills: Vec<LineItem>,
    pub categories: Vec<LineItem>,
    pub savings: SavingsRule,
}

impl BudgetInput {
    /// An empty plan for the given household
    pub fn new(household: Household, income_a: f64) -> Self {
        Self {
            household,
            income_a,
            ..Self::default()
        }
    }

    /// Builder-style: append a bill
    pub fn with_bill(mut self, name: impl Into<String>, amount: f64) -> Self {
        self.bills.push(LineItem::new(name, amount));
        self
    }

    /// Builder-style: append a category
    pub fn with_category(mut self, name: impl Into<String>, amount: f64) -> Self {
        self.categories.push(LineItem::new(name, amount));
        self
    }

    /// Builder-style: set the savings rule
    pub fn with_savings(mut self, savings: SavingsRule) -> Self {
        self.savings = savings;
        self
    }

    /// Append a bill and return its id; an empty name gets [`DEFAULT_BILL_NAME`]
    pub fn add_bill(&mut self, name: &str, amount: f64) -> String {
        push_item(&mut self.bills, name, DEFAULT_BILL_NAME, amount)
    }

    /// Patch the first bill with `id`; returns false if there is none
    pub fn update_bill(&mut self, id: &str, patch: LineItemPatch) -> bool {
        patch_item(&mut self.bills, id, patch)
    }

    /// Remove every bill with `id`; returns false if none matched
    pub fn remove_bill(&mut self, id: &str) -> bool {
        remove_items(&mut self.bills, id)
    }

    /// Append a category and return its id; an empty name gets [`DEFAULT_CATEGORY_NAME`]
    pub fn add_category(&mut self, name: &str, amount: f64) -> String {
        push_item(&mut self.categories, name, DEFAULT_CATEGORY_NAME, amount)
    }

    /// Patch the first category with `id`; returns false if there is none
    pub fn update_category(&mut self, id: &str, patch: LineItemPatch) -> bool {
        patch_item(&mut self.categories, id, patch)
    }

    /// Remove every category with `id`; returns false if none matched
    pub fn remove_category(&mut self, id: &str) -> bool {
        remove_items(&mut self.categories, id)
    }

    /// Find a bill by id, or failing that by case-insensitive name
    pub fn find_bill(&self, id_or_name: &str) -> Option<&LineItem> {
        find_item(&self.bills, id_or_name)
    }

    /// Find a category by id, or failing that by case-insensitive name
    pub fn find_category(&self, id_or_name: &str) -> Option<&LineItem> {
        find_item(&self.categories, id_or_name)
    }
}

fn push_item(items: &mut Vec<LineItem>, name: &str, fallback: &str, amount: f64) -> String {
    let name = if name.trim().is_empty() {
        fallback
    } else {
        name
    };
    let item = LineItem::new(name, amount);
    let id = item.id.clone();
    items.push(item);
    id
}

fn patch_item(items: &mut [LineItem], id: &str, patch: LineItemPatch) -> bool {
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.apply(patch);
            true
        }
        None => false,
    }
}

fn remove_items(items: &mut Vec<LineItem>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

fn find_item<'a>(items: &'a [LineItem], id_or_name: &str) -> Option<&'a LineItem> {
    items.iter().find(|item| item.id == id_or_name).or_else(|| {
        let wanted = id_or_name.trim().to_lowercase();
        items.iter().find(|item| item.name.to_lowercase() == wanted)
    })
}

/// Flat wire representation of [`BudgetInput`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBudgetInput {
    household_type: HouseholdType,
    #[serde(default, deserialize_with = "lenient_amount")]
    income_a: f64,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_optional_amount"
    )]
    income_b: Option<f64>,
    #[serde(default)]
    bills: Vec<LineItem>,
    #[serde(default)]
    categories: Vec<LineItem>,
    savings: SavingsRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    couple: Option<CoupleSettings>,
}

impl From<WireBudgetInput> for BudgetInput {
    fn from(wire: WireBudgetInput) -> Self {
        let household = match wire.household_type {
            HouseholdType::Individual => Household::Individual,
            HouseholdType::Student => Household::Student,
            HouseholdType::Couple => Household::Couple {
                income_b: wire.income_b.unwrap_or(0.0),
                split_rule: wire.couple.map(|c| c.split_rule),
            },
        };

        Self {
            household,
            income_a: wire.income_a,
            bills: wire.bills,
            categories: wire.categories,
            savings: wire.savings,
        }
    }
}

impl From<BudgetInput> for WireBudgetInput {
    fn from(input: BudgetInput) -> Self {
        let (income_b, couple) = match input.household {
            Household::Couple {
                income_b,
                split_rule,
            } => (
                Some(income_b),
                split_rule.map(|split_rule| CoupleSettings { split_rule }),
            ),
            _ => (None, None),
        };

        Self {
            household_type: input.household.kind(),
            income_a: input.income_a,
            income_b,
            bills: input.bills,
            categories: input.categories,
            savings: input.savings,
            couple,
        }
    }
}

/// Whatever shape an amount arrived in
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl RawAmount {
    fn into_f64(self) -> f64 {
        match self {
            Self::Number(n) => n,
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .unwrap_or(0.0),
            Self::Other(_) => 0.0,
        }
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawAmount::deserialize(deserializer)?.into_f64())
}

fn lenient_optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_amount(deserializer).map(Some)
}
