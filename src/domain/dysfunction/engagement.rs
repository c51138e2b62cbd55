//! Engagement score derived from Trust and Psychological Safety.

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{COST_COEFFICIENTS, DRIVER_MAX, DRIVER_RANGE, ENGAGEMENT_THRESHOLDS};
use super::DriverScore;

/// Gallup-style engagement band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngagementCategory {
    #[serde(rename = "Engaged")]
    Engaged,
    #[serde(rename = "Not Engaged")]
    NotEngaged,
    #[serde(rename = "Actively Disengaged")]
    ActivelyDisengaged,
}

impl EngagementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementCategory::Engaged => "Engaged",
            EngagementCategory::NotEngaged => "Not Engaged",
            EngagementCategory::ActivelyDisengaged => "Actively Disengaged",
        }
    }
}

impl fmt::Display for EngagementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mean of Trust and Psychological Safety, in [1, 7].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngagementScore(Decimal);

impl EngagementScore {
    pub(crate) fn new(trust: &DriverScore, psych_safety: &DriverScore) -> Self {
        Self((trust.value() + psych_safety.value()) / Decimal::TWO)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Step classification: >= 5.5 engaged, >= 3.5 not engaged, else actively disengaged.
    pub fn category(&self) -> EngagementCategory {
        if self.0 >= ENGAGEMENT_THRESHOLDS.engaged {
            EngagementCategory::Engaged
        } else if self.0 >= ENGAGEMENT_THRESHOLDS.not_engaged {
            EngagementCategory::NotEngaged
        } else {
            EngagementCategory::ActivelyDisengaged
        }
    }

    /// Continuous disengagement coefficient, `0.18 / (1 + e^(2(E - 4)))`.
    ///
    /// The exponent stays within [-6, 6] for any valid score.
    pub fn coefficient(&self) -> Decimal {
        let t = ENGAGEMENT_THRESHOLDS;
        let exponent = t.sigmoid_steepness * (self.0 - t.sigmoid_midpoint);
        COST_COEFFICIENTS.disengagement_max / (Decimal::ONE + exponent.exp())
    }

    /// Linear share of the scale left unrealised, `(7 - E) / 6`.
    pub fn adjustment_factor(&self) -> Decimal {
        (DRIVER_MAX - self.0) / DRIVER_RANGE
    }
}
