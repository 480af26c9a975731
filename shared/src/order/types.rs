//! Cart line types

use crate::models::MenuItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cart line - a copy of the menu item plus a cart-local id
///
/// `line_id` is unique within a cart; `item.id` is the catalog id and may
/// repeat when the same dish is added twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub line_id: String,
    #[serde(flatten)]
    pub item: MenuItem,
}

impl CartLine {
    pub fn new(line_id: impl Into<String>, item: MenuItem) -> Self {
        Self {
            line_id: line_id.into(),
            item,
        }
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn price(&self) -> Decimal {
        self.item.price
    }

    pub fn calories(&self) -> u32 {
        self.item.calories
    }

    pub fn image(&self) -> &str {
        &self.item.image
    }
}
