//! Money helpers using rust_decimal for precision

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Build a monetary value from cents, e.g. `money(2499)` = 24.99
#[inline]
pub const fn money(cents: i64) -> Decimal {
    Decimal::from_parts(
        cents.unsigned_abs() as u32,
        (cents.unsigned_abs() >> 32) as u32,
        0,
        cents < 0,
        DECIMAL_PLACES,
    )
}

/// Round to 2 decimal places, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format for display, e.g. "$24.99"
pub fn format_money(value: Decimal) -> String {
    format!("${:.2}", round_money(value))
}
