//! Reveal screen data

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{InterventionStatus, UserProfile};
use shared::order::CartLine;

use crate::substitution::{KarmaBand, SubstitutedLine};

/// Everything the reveal screen shows, exposed only once the order is
/// revealed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealData {
    pub order_no: u64,
    pub band: KarmaBand,
    pub substituted_order: Vec<SubstitutedLine>,
    pub original_cart: Vec<CartLine>,
    pub requester: UserProfile,
    pub requester_status: InterventionStatus,
    pub partner: UserProfile,
    pub partner_status: InterventionStatus,
    pub summary: SwapSummary,
}

/// Ordered vs delivered comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapSummary {
    pub swapped: bool,
    pub original_total: Decimal,
    pub delivered_total: Decimal,
    pub original_calories: u64,
    pub delivered_calories: u64,
    /// Ordered lines that did not come back
    pub items_missing: usize,
}

impl SwapSummary {
    pub fn compute(band: KarmaBand, original: &[CartLine], delivered: &[SubstitutedLine]) -> Self {
        Self {
            swapped: band.swaps(),
            original_total: original.iter().map(CartLine::price).sum(),
            delivered_total: delivered.iter().map(SubstitutedLine::price).sum(),
            original_calories: original.iter().map(|l| u64::from(l.calories())).sum(),
            delivered_calories: delivered.iter().map(|l| u64::from(l.calories())).sum(),
            items_missing: original.len().saturating_sub(delivered.len()),
        }
    }
}

impl RevealData {
    pub(crate) fn new(
        order_no: u64,
        band: KarmaBand,
        substituted_order: Vec<SubstitutedLine>,
        original_cart: Vec<CartLine>,
        requester: UserProfile,
        partner: UserProfile,
    ) -> Self {
        let summary = SwapSummary::compute(band, &original_cart, &substituted_order);
        Self {
            order_no,
            band,
            requester_status: requester.intervention_status(),
            partner_status: partner.intervention_status(),
            substituted_order,
            original_cart,
            requester,
            partner,
            summary,
        }
    }

    /// Reveal headline, empty when nothing was swapped
    pub fn headline(&self) -> String {
        if !self.summary.swapped {
            return String::new();
        }
        format!(
            "We've given you {}'s order instead.",
            self.partner.name
        )
    }
}
