//! The seven team-effectiveness drivers and their 1-7 scores.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{DRIVER_MAX, DRIVER_MIN, DRIVER_RANGE, DRIVER_WEIGHTS};
use super::numeric::{clamp, decimal_from_f64};
use super::ValidationError;

/// A named team-effectiveness dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Driver {
    Trust,
    #[serde(rename = "psych_safety")]
    PsychologicalSafety,
    #[serde(rename = "comm_quality")]
    CommunicationQuality,
    GoalClarity,
    Coordination,
    #[serde(rename = "tms")]
    TransactiveMemory,
    TeamCognition,
}

impl Driver {
    /// All drivers, in survey order.
    pub const ALL: [Driver; 7] = [
        Driver::Trust,
        Driver::PsychologicalSafety,
        Driver::CommunicationQuality,
        Driver::GoalClarity,
        Driver::Coordination,
        Driver::TransactiveMemory,
        Driver::TeamCognition,
    ];

    /// Position in `Driver::ALL`.
    pub fn index(&self) -> usize {
        match self {
            Driver::Trust => 0,
            Driver::PsychologicalSafety => 1,
            Driver::CommunicationQuality => 2,
            Driver::GoalClarity => 3,
            Driver::Coordination => 4,
            Driver::TransactiveMemory => 5,
            Driver::TeamCognition => 6,
        }
    }

    /// Wire key used in requests and stored answers.
    pub fn key(&self) -> &'static str {
        match self {
            Driver::Trust => "trust",
            Driver::PsychologicalSafety => "psych_safety",
            Driver::CommunicationQuality => "comm_quality",
            Driver::GoalClarity => "goal_clarity",
            Driver::Coordination => "coordination",
            Driver::TransactiveMemory => "tms",
            Driver::TeamCognition => "team_cognition",
        }
    }

    /// Returns the display label for this driver.
    pub fn label(&self) -> &'static str {
        match self {
            Driver::Trust => "Trust",
            Driver::PsychologicalSafety => "Psychological Safety",
            Driver::CommunicationQuality => "Communication Quality",
            Driver::GoalClarity => "Goal Clarity",
            Driver::Coordination => "Coordination",
            Driver::TransactiveMemory => "Transactive Memory",
            Driver::TeamCognition => "Team Cognition",
        }
    }

    /// Weight of this driver in the readiness score.
    pub fn readiness_weight(&self) -> Decimal {
        DRIVER_WEIGHTS[self.index()]
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single driver's score, always within [1, 7].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverScore {
    driver: Driver,
    value: Decimal,
}

impl DriverScore {
    /// Builds a score from raw survey input.
    ///
    /// Finite values outside [1, 7] are clamped, never rejected.
    /// Non-finite values are rejected as `InvalidDriverScore`.
    pub(crate) fn new(driver: Driver, raw: f64) -> Result<Self, ValidationError> {
        let value = match decimal_from_f64(raw) {
            Some(v) => clamp(v, DRIVER_MIN, DRIVER_MAX),
            // Finite but beyond decimal range: only the sign matters.
            None if raw.is_finite() && raw > 0.0 => DRIVER_MAX,
            None if raw.is_finite() => DRIVER_MIN,
            None => return Err(ValidationError::invalid_driver_score(driver, raw)),
        };
        Ok(Self { driver, value })
    }

    /// Builds a score from an exact decimal, clamping into [1, 7].
    #[cfg(test)]
    pub(crate) fn from_decimal(driver: Driver, value: Decimal) -> Self {
        Self {
            driver,
            value: clamp(value, DRIVER_MIN, DRIVER_MAX),
        }
    }

    pub fn driver(&self) -> Driver {
        self.driver
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Maps the score onto [0, 1].
    pub fn normalize(&self) -> Decimal {
        (self.value - DRIVER_MIN) / DRIVER_RANGE
    }

    /// Dysfunction magnitude, `7 - value`, in [0, 6].
    pub fn invert(&self) -> Decimal {
        DRIVER_MAX - self.value
    }
}

impl fmt::Display for DriverScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.1}", self.driver.label(), self.value)
    }
}

/// Exactly one score for each of the seven drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverScores {
    pub trust: DriverScore,
    pub psych_safety: DriverScore,
    pub comm_quality: DriverScore,
    pub goal_clarity: DriverScore,
    pub coordination: DriverScore,
    pub tms: DriverScore,
    pub team_cognition: DriverScore,
}

impl DriverScores {
    /// Returns the score for a driver.
    pub fn get(&self, driver: Driver) -> &DriverScore {
        match driver {
            Driver::Trust => &self.trust,
            Driver::PsychologicalSafety => &self.psych_safety,
            Driver::CommunicationQuality => &self.comm_quality,
            Driver::GoalClarity => &self.goal_clarity,
            Driver::Coordination => &self.coordination,
            Driver::TransactiveMemory => &self.tms,
            Driver::TeamCognition => &self.team_cognition,
        }
    }

    /// Iterates scores in `Driver::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = &DriverScore> + '_ {
        Driver::ALL.iter().map(move |d| self.get(*d))
    }

    /// Arithmetic mean of the seven raw values.
    pub fn mean(&self) -> Decimal {
        let total: Decimal = self.iter().map(|s| s.value()).sum();
        total / Decimal::from(Driver::ALL.len())
    }
}

/// Driver scores as submitted, before validation.
///
/// A `None` means the answer is missing, which the engine rejects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDriverScores {
    #[serde(default)]
    pub trust: Option<f64>,
    #[serde(default)]
    pub psych_safety: Option<f64>,
    #[serde(default)]
    pub comm_quality: Option<f64>,
    #[serde(default)]
    pub goal_clarity: Option<f64>,
    #[serde(default)]
    pub coordination: Option<f64>,
    #[serde(default)]
    pub tms: Option<f64>,
    #[serde(default)]
    pub team_cognition: Option<f64>,
}

impl RawDriverScores {
    /// All seven drivers answered with the same value.
    pub fn uniform(value: f64) -> Self {
        Self::from_values([value; 7])
    }

    /// All seven drivers answered, in `Driver::ALL` order.
    pub fn from_values(values: [f64; 7]) -> Self {
        let mut raw = Self::default();
        for (driver, value) in Driver::ALL.iter().zip(values) {
            raw.set(*driver, Some(value));
        }
        raw
    }

    /// Returns a copy with one driver's answer replaced.
    pub fn with(mut self, driver: Driver, value: f64) -> Self {
        self.set(driver, Some(value));
        self
    }

    /// Returns a copy with one driver's answer removed.
    pub fn without(mut self, driver: Driver) -> Self {
        self.set(driver, None);
        self
    }

    pub fn get(&self, driver: Driver) -> Option<f64> {
        match driver {
            Driver::Trust => self.trust,
            Driver::PsychologicalSafety => self.psych_safety,
            Driver::CommunicationQuality => self.comm_quality,
            Driver::GoalClarity => self.goal_clarity,
            Driver::Coordination => self.coordination,
            Driver::TransactiveMemory => self.tms,
            Driver::TeamCognition => self.team_cognition,
        }
    }

    fn set(&mut self, driver: Driver, value: Option<f64>) {
        let slot = match driver {
            Driver::Trust => &mut self.trust,
            Driver::PsychologicalSafety => &mut self.psych_safety,
            Driver::CommunicationQuality => &mut self.comm_quality,
            Driver::GoalClarity => &mut self.goal_clarity,
            Driver::Coordination => &mut self.coordination,
            Driver::TransactiveMemory => &mut self.tms,
            Driver::TeamCognition => &mut self.team_cognition,
        };
        *slot = value;
    }
}
