//! Substitution Engine
//!
//! Maps a frozen cart and the requester's karma to the order that is actually
//! delivered. Pure: no clock, no randomness, no profile writes.
//!
//! # Bands
//!
//! ```text
//! karma < -20        → Intervention: first N healthy substitutes
//! -20 <= karma <= 50 → Neutral:      cart passes through unchanged
//! karma > 50         → Indulgence:   first N indulgent substitutes
//!
//! N = min(cart length, table length)
//! ```

mod tables;

pub use tables::{HEALTHY_SUBSTITUTES, INDULGENT_SUBSTITUTES, SubstituteEntry};

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{INDULGENCE_THRESHOLD, INTERVENTION_THRESHOLD, InterventionStatus};
use shared::order::CartLine;

/// Karma partition used by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KarmaBand {
    Intervention,
    Neutral,
    Indulgence,
}

impl KarmaBand {
    /// Thresholds are exclusive: -20 and 50 are both neutral
    pub fn from_karma(karma: i64) -> Self {
        if karma < INTERVENTION_THRESHOLD {
            Self::Intervention
        } else if karma > INDULGENCE_THRESHOLD {
            Self::Indulgence
        } else {
            Self::Neutral
        }
    }

    /// Whether this band replaces the cart
    pub fn swaps(&self) -> bool {
        !matches!(self, Self::Neutral)
    }
}

impl From<KarmaBand> for InterventionStatus {
    fn from(band: KarmaBand) -> Self {
        match band {
            KarmaBand::Intervention => InterventionStatus::NeedsIntervention,
            KarmaBand::Neutral => InterventionStatus::Balanced,
            KarmaBand::Indulgence => InterventionStatus::NeedsToLiveALittle,
        }
    }
}

/// One delivered line
///
/// Only the engine builds these; everything else reads them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstitutedLine {
    name: String,
    price: Decimal,
    calories: u32,
    image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_name: Option<String>,
}

impl SubstitutedLine {
    fn from_entry(entry: &SubstituteEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            price: entry.price,
            calories: entry.calories,
            image: entry.image.to_string(),
            original_name: Some(entry.original_name.to_string()),
        }
    }

    fn pass_through(line: &CartLine) -> Self {
        Self {
            name: line.name().to_string(),
            price: line.price(),
            calories: line.calories(),
            image: line.image().to_string(),
            original_name: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Set only on substituted lines
    pub fn original_name(&self) -> Option<&str> {
        self.original_name.as_deref()
    }
}

/// Engine holding the two substitute tables
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionEngine {
    healthy: &'static [SubstituteEntry],
    indulgent: &'static [SubstituteEntry],
}

impl Default for SubstitutionEngine {
    fn default() -> Self {
        Self::with_tables(HEALTHY_SUBSTITUTES, INDULGENT_SUBSTITUTES)
    }
}

impl SubstitutionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom tables
    pub fn with_tables(
        healthy: &'static [SubstituteEntry],
        indulgent: &'static [SubstituteEntry],
    ) -> Self {
        Self { healthy, indulgent }
    }

    /// Compute the delivered order
    pub fn substitute(&self, cart: &[CartLine], karma: i64) -> Vec<SubstitutedLine> {
        match KarmaBand::from_karma(karma) {
            KarmaBand::Intervention => Self::take_from(self.healthy, cart.len()),
            KarmaBand::Indulgence => Self::take_from(self.indulgent, cart.len()),
            KarmaBand::Neutral => cart.iter().map(SubstitutedLine::pass_through).collect(),
        }
    }

    // Truncates, never cycles
    fn take_from(table: &[SubstituteEntry], n: usize) -> Vec<SubstitutedLine> {
        table
            .iter()
            .take(n)
            .map(SubstitutedLine::from_entry)
            .collect()
    }
}

/// Substitute with the default tables
pub fn substitute(cart: &[CartLine], karma: i64) -> Vec<SubstitutedLine> {
    SubstitutionEngine::default().substitute(cart, karma)
}
