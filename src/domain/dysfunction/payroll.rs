//! Payroll value object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::PAYROLL_MAX;
use super::numeric::decimal_from_f64;
use super::ValidationError;

/// Annual team payroll, strictly positive, held as an exact decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payroll(Decimal);

impl Payroll {
    /// Validates a raw payroll amount.
    pub(crate) fn new(raw: f64) -> Result<Self, ValidationError> {
        if !raw.is_finite() {
            return Err(ValidationError::invalid_payroll(raw, "a finite number"));
        }
        if raw <= 0.0 {
            return Err(ValidationError::invalid_payroll(raw, "greater than 0"));
        }
        let amount = decimal_from_f64(raw)
            .filter(|amount| *amount <= PAYROLL_MAX)
            .ok_or_else(|| ValidationError::invalid_payroll(raw, "at most 1e18"))?;
        if amount.is_zero() {
            // Positive but too small to survive decimal conversion.
            return Err(ValidationError::invalid_payroll(raw, "greater than 0"));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Scalar multiplication without leaving decimal arithmetic.
    pub fn times(&self, factor: Decimal) -> Decimal {
        self.0 * factor
    }
}

impl fmt::Display for Payroll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
