//! User Profile Model
//!
//! Karma is the hidden score that drives substitution. The intervention
//! status label is always derived from it, never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Karma strictly below this value triggers a healthy intervention
pub const INTERVENTION_THRESHOLD: i64 = -20;

/// Karma strictly above this value triggers an indulgent swap
pub const INDULGENCE_THRESHOLD: i64 = 50;

/// Number of recent orders shown on the partner card
pub const RECENT_ORDERS_DISPLAY_LIMIT: usize = 5;

/// 干预状态（由 karma 推导）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterventionStatus {
    /// karma < -20
    NeedsIntervention,
    /// -20 <= karma <= 50
    Balanced,
    /// karma > 50
    NeedsToLiveALittle,
}

impl InterventionStatus {
    pub fn from_karma(karma: i64) -> Self {
        if karma < INTERVENTION_THRESHOLD {
            Self::NeedsIntervention
        } else if karma > INDULGENCE_THRESHOLD {
            Self::NeedsToLiveALittle
        } else {
            Self::Balanced
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::NeedsIntervention => "NEEDS INTERVENTION",
            Self::Balanced => "BALANCED",
            Self::NeedsToLiveALittle => "NEEDS TO LIVE A LITTLE",
        }
    }
}

impl fmt::Display for InterventionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User profile (requester or swap partner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    /// Hidden health karma score
    pub karma: i64,
    /// Most recent first
    pub recent_orders: Vec<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, karma: i64, recent_orders: Vec<String>) -> Self {
        Self {
            name: name.into(),
            karma,
            recent_orders,
        }
    }

    /// Recomputed on every call so it can never drift from `karma`.
    pub fn intervention_status(&self) -> InterventionStatus {
        InterventionStatus::from_karma(self.karma)
    }

    /// Recent orders truncated for display
    pub fn recent_orders_for_display(&self) -> &[String] {
        let end = self.recent_orders.len().min(RECENT_ORDERS_DISPLAY_LIMIT);
        &self.recent_orders[..end]
    }
}
