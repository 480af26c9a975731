//! 购物车
//!
//! Ordered lines; never rejects an add. The lifecycle controller is the only
//! owner and refuses edits once an order is placed.

use rust_decimal::Decimal;
use shared::models::MenuItem;
use shared::order::{CartLine, CartSnapshot};
use shared::util::new_line_id;

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new line with a fresh cart-local id
    pub fn add(&mut self, item: MenuItem) -> CartLine {
        let mut line_id = new_line_id();
        while self.contains(&line_id) {
            line_id = new_line_id();
        }
        let line = CartLine::new(line_id, item);
        self.lines.push(line.clone());
        line
    }

    /// Remove a line; unknown ids are ignored
    pub fn remove(&mut self, line_id: &str) -> Option<CartLine> {
        let idx = self.lines.iter().position(|l| l.line_id == line_id)?;
        Some(self.lines.remove(idx))
    }

    pub fn contains(&self, line_id: &str) -> bool {
        self.lines.iter().any(|l| l.line_id == line_id)
    }

    /// Sum of line prices
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::price).sum()
    }

    /// Subtotal plus the restaurant's delivery fee
    pub fn total_with_delivery(&self, delivery_fee: Decimal) -> Decimal {
        self.subtotal() + delivery_fee
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            subtotal: self.subtotal(),
            item_count: self.lines.len(),
        }
    }
}
