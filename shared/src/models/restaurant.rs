//! Restaurant Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Restaurant entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub rating: f32,
    /// Display label, e.g. "25-35 min"
    pub delivery_time: String,
    pub delivery_fee: Decimal,
    pub image: String,
    pub category: String,
}
