//! Conversions from raw survey/request numbers into exact decimals.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Converts a finite `f64` into the decimal its shortest round-trip text denotes.
///
/// `4.001_f64` becomes exactly `4.001`, not the nearest binary fraction.
/// Returns `None` for NaN, infinities and magnitudes a `Decimal` cannot hold.
pub(crate) fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string()).ok()
}

/// Clamps `value` into `[min, max]`.
pub(crate) fn clamp(value: Decimal, min: Decimal, max: Decimal) -> Decimal {
    value.max(min).min(max)
}
