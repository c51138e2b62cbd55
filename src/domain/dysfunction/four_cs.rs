//! Optional 4 C's organisational scores and their cost amplification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{DRIVER_MAX, DRIVER_MIN, FOUR_CS_MAX_AMPLIFICATION};
use super::numeric::{clamp, decimal_from_f64};
use super::ValidationError;

/// One of the 4 C's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FourCsDimension {
    Criteria,
    Commitment,
    Collaboration,
    Change,
}

impl FourCsDimension {
    pub const ALL: [FourCsDimension; 4] = [
        FourCsDimension::Criteria,
        FourCsDimension::Commitment,
        FourCsDimension::Collaboration,
        FourCsDimension::Change,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FourCsDimension::Criteria => "criteria",
            FourCsDimension::Commitment => "commitment",
            FourCsDimension::Collaboration => "collaboration",
            FourCsDimension::Change => "change",
        }
    }
}

impl fmt::Display for FourCsDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 4 C's scores as submitted, on the same 1-7 scale as drivers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourCsScores {
    pub criteria: f64,
    pub commitment: f64,
    pub collaboration: f64,
    pub change: f64,
}

impl FourCsScores {
    pub fn uniform(value: f64) -> Self {
        Self {
            criteria: value,
            commitment: value,
            collaboration: value,
            change: value,
        }
    }

    pub fn get(&self, dimension: FourCsDimension) -> f64 {
        match dimension {
            FourCsDimension::Criteria => self.criteria,
            FourCsDimension::Commitment => self.commitment,
            FourCsDimension::Collaboration => self.collaboration,
            FourCsDimension::Change => self.change,
        }
    }
}

/// `1 + 0.5 * (1 - avg / 7)`, or exactly 1.0 without 4 C's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FourCsMultiplier(Decimal);

impl FourCsMultiplier {
    /// Scores are clamped into [1, 7]; non-finite scores are rejected.
    pub(crate) fn new(scores: Option<&FourCsScores>) -> Result<Self, ValidationError> {
        let scores = match scores {
            Some(scores) => scores,
            None => return Ok(Self::neutral()),
        };

        let mut total = Decimal::ZERO;
        for dimension in FourCsDimension::ALL {
            let raw = scores.get(dimension);
            let value = match decimal_from_f64(raw) {
                Some(v) => clamp(v, DRIVER_MIN, DRIVER_MAX),
                None if raw.is_finite() && raw > 0.0 => DRIVER_MAX,
                None if raw.is_finite() => DRIVER_MIN,
                None => return Err(ValidationError::invalid_four_cs_score(dimension, raw)),
            };
            total += value;
        }

        let average = total / Decimal::from(FourCsDimension::ALL.len());
        Ok(Self(
            Decimal::ONE + FOUR_CS_MAX_AMPLIFICATION * (Decimal::ONE - average / DRIVER_MAX),
        ))
    }

    pub fn neutral() -> Self {
        Self(Decimal::ONE)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Default for FourCsMultiplier {
    fn default() -> Self {
        Self::neutral()
    }
}
