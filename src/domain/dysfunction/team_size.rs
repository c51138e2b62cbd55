//! Team size value object and the η(N) efficiency factor.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::TEAM_SIZE_THRESHOLDS;
use super::ValidationError;

/// Number of people on the team, at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamSize(u32);

impl TeamSize {
    /// Validates a raw team size.
    ///
    /// Rejects non-finite, non-integer, zero, negative and values beyond `u32`.
    pub(crate) fn new(raw: f64) -> Result<Self, ValidationError> {
        if !raw.is_finite() {
            return Err(ValidationError::invalid_team_size(raw, "a finite number"));
        }
        if raw < 1.0 {
            return Err(ValidationError::invalid_team_size(raw, "at least 1"));
        }
        if raw.fract() != 0.0 {
            return Err(ValidationError::invalid_team_size(raw, "an integer"));
        }
        if raw > f64::from(u32::MAX) {
            return Err(ValidationError::invalid_team_size(raw, "at most 4294967295"));
        }
        Ok(Self(raw as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// η(N): 1.2 below 5 people, 1.0 from 5 to 12, then +0.02 per extra person.
    pub fn efficiency_factor(&self) -> Decimal {
        let t = TEAM_SIZE_THRESHOLDS;
        if self.0 < t.understaffed_below {
            t.understaffed_factor
        } else if self.0 <= t.optimal_max {
            Decimal::ONE
        } else {
            Decimal::ONE + t.overstaffed_per_person * Decimal::from(self.0 - t.optimal_max)
        }
    }

    pub fn is_understaffed(&self) -> bool {
        self.0 < TEAM_SIZE_THRESHOLDS.understaffed_below
    }

    pub fn is_optimal(&self) -> bool {
        !self.is_understaffed() && !self.is_overstaffed()
    }

    pub fn is_overstaffed(&self) -> bool {
        self.0 > TEAM_SIZE_THRESHOLDS.optimal_max
    }
}

impl fmt::Display for TeamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
