//! Identifiers
//!
//! Saved plans get a UUID-backed [`PlanId`]. Bills and categories keep plain
//! string ids, because share links and hand-written plan files carry whatever
//! ids their author chose; [`new_item_id`] mints short ones for new items.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a saved plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(Uuid);

impl PlanId {
    /// Display prefix used by the CLI
    pub const PREFIX: &'static str = "plan-";

    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short form shown in listings
    pub fn short(&self) -> String {
        format!("{}{}", Self::PREFIX, &self.0.simple().to_string()[..8])
    }

    /// Whether `query` names this plan, either in full or by its short form
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if let Ok(parsed) = query.parse::<PlanId>() {
            return parsed == *self;
        }
        let hex = query.strip_prefix(Self::PREFIX).unwrap_or(query);
        hex.len() >= 4 && self.0.simple().to_string().starts_with(&hex.to_lowercase())
    }
}

impl Default for PlanId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PlanId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for PlanId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(Self::PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Mint a short random id for a bill or category (8 lowercase hex chars)
pub fn new_item_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
