//! Fixed substitute tables
//!
//! Entries are handed out in table order; a cart longer than a table gets
//! fewer items back.

use rust_decimal::Decimal;

use crate::utils::money;

/// One row of a substitute table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstituteEntry {
    pub name: &'static str,
    pub price: Decimal,
    pub calories: u32,
    pub image: &'static str,
    /// Narrative annotation for the reveal screen
    pub original_name: &'static str,
}

/// Delivered when the requester is in the intervention band
pub const HEALTHY_SUBSTITUTES: &[SubstituteEntry] = &[
    SubstituteEntry {
        name: "Sad Desk Salad",
        price: money(1299),
        calories: 180,
        image: "🥗",
        original_name: "Quinoa Power Bowl from Healthy Harvest",
    },
    SubstituteEntry {
        name: "Kale Smoothie of Shame",
        price: money(899),
        calories: 140,
        image: "🥤",
        original_name: "Green Goddess Smoothie from Healthy Harvest",
    },
    SubstituteEntry {
        name: "Punishment Veggie Bowl",
        price: money(1499),
        calories: 200,
        image: "🥦",
        original_name: "Superfood Bowl from Healthy Harvest",
    },
];

/// Delivered when the requester is in the indulgence band
pub const INDULGENT_SUBSTITUTES: &[SubstituteEntry] = &[
    SubstituteEntry {
        name: "Surprise Pizza",
        price: money(2299),
        calories: 520,
        image: "🍕",
        original_name: "Meat Lovers from Tony's Pizza",
    },
    SubstituteEntry {
        name: "Mystery Burger",
        price: money(1699),
        calories: 680,
        image: "🍔",
        original_name: "Triple Bacon from Burger Barn",
    },
];
