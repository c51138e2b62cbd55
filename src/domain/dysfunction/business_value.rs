//! Revenue to payroll ratio.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::constants::{BUSINESS_VALUE_MAX, BUSINESS_VALUE_MIN};
use super::numeric::{clamp, decimal_from_f64};
use super::Payroll;

/// How much revenue each payroll dollar produces, clamped to [1, 10].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessValueRatio(Decimal);

impl BusinessValueRatio {
    /// Defaults to 1.0 when revenue is absent, zero or negative.
    pub(crate) fn new(revenue: Option<f64>, payroll: &Payroll) -> Self {
        let revenue = match revenue {
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => return Self::neutral(),
        };
        let ratio = decimal_from_f64(revenue)
            .and_then(|r| r.checked_div(payroll.amount()))
            // Only a ratio far above the ceiling fails to convert or divide.
            .unwrap_or(BUSINESS_VALUE_MAX);
        Self(clamp(ratio, BUSINESS_VALUE_MIN, BUSINESS_VALUE_MAX))
    }

    pub fn neutral() -> Self {
        Self(BUSINESS_VALUE_MIN)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_low(&self) -> bool {
        self.0 < Decimal::TWO
    }

    pub fn is_high(&self) -> bool {
        self.0 > Decimal::from(5)
    }
}

impl Default for BusinessValueRatio {
    fn default() -> Self {
        Self::neutral()
    }
}
