//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item entity (catalog reference data, immutable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Catalog id
    pub id: i64,
    pub name: String,
    /// Non-negative price
    pub price: Decimal,
    pub calories: u32,
    /// Emoji or icon reference
    pub image: String,
    /// Catalog metadata only, never consulted by substitution
    pub health_score: i32,
}

impl MenuItem {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: Decimal,
        calories: u32,
        image: impl Into<String>,
        health_score: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            calories,
            image: image.into(),
            health_score,
        }
    }
}
