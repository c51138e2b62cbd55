//! Confidence interval around the final cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::CONFIDENCE_BOUNDS;

/// `[tcd * 0.75, tcd * 1.30]` at a nominal 95% level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: Decimal,
    pub upper: Decimal,
    pub level: Decimal,
}

impl ConfidenceInterval {
    /// Derives the interval from the capped cost.
    pub fn from_tcd(tcd: Decimal) -> Self {
        let b = CONFIDENCE_BOUNDS;
        Self {
            lower: tcd * b.lower_multiplier,
            upper: tcd * b.upper_multiplier,
            level: b.level,
        }
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn width(&self) -> Decimal {
        self.upper - self.lower
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}] ({}% CI)",
            self.lower,
            self.upper,
            (self.level * Decimal::ONE_HUNDRED).normalize()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_scale_with_tcd() {
        let ci = ConfidenceInterval::from_tcd(Decimal::from(100_000));
        assert_eq!(ci.lower, Decimal::from(75_000));
        assert_eq!(ci.upper, Decimal::from(130_000));
        assert_eq!(ci.width(), Decimal::from(55_000));
    }

    #[test]
    fn contains_the_point_estimate() {
        let tcd = Decimal::from(420_000);
        let ci = ConfidenceInterval::from_tcd(tcd);
        assert!(ci.contains(tcd));
        assert!(!ci.contains(Decimal::from(1_000_000)));
    }

    #[test]
    fn zero_cost_collapses_interval() {
        let ci = ConfidenceInterval::from_tcd(Decimal::ZERO);
        assert_eq!(ci.width(), Decimal::ZERO);
        assert!(ci.contains(Decimal::ZERO));
    }

    #[test]
    fn displays_bounds_and_level() {
        let ci = ConfidenceInterval::from_tcd(Decimal::from(1000));
        assert_eq!(format!("{}", ci), "[750.00, 1300.00] (95% CI)");
    }
}
