//! Read-side snapshots handed to the presentation layer

use super::types::CartLine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle phase
///
/// `Tracking` covers both "placed" and "being delivered": the order is
/// frozen and the reveal is pending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecyclePhase {
    #[default]
    Idle,
    Tracking,
    Revealed,
}

impl LifecyclePhase {
    /// Whether the cart may be edited
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::Tracking => write!(f, "TRACKING"),
            Self::Revealed => write!(f, "REVEALED"),
        }
    }
}

/// Cart snapshot for cart rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    /// Sum of line prices, 0 for an empty cart
    pub subtotal: Decimal,
    pub item_count: usize,
}

/// What the tracking screen may show while the reveal is pending
///
/// Deliberately carries nothing about the delivered items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingInfo {
    pub order_no: u64,
    pub line_count: usize,
    /// e.g. "25-35 minutes"
    pub estimated_delivery: String,
    /// Unix millis when the order was placed
    pub placed_at: i64,
}
