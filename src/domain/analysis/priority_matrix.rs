//! Priority Matrix - ranks drivers by team impact and business value.
//!
//! Each driver's gap to a perfect 7 is weighted twice: once by a research
//! based team-performance weight shared by all industries, and once by an
//! industry-specific business value weight. Both scores are compared with a
//! fixed threshold to place the driver in one of four quadrants.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::dysfunction::constants::DRIVER_MAX;
use crate::domain::dysfunction::{Driver, DriverScores, Industry};
use crate::domain::foundation::Timestamp;

/// Weighted score at or above which a dimension counts as high.
pub const QUADRANT_THRESHOLD: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// Where a driver falls on the impact / value grid.
///
/// Declaration order is priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Quadrant {
    /// High team impact and high business value.
    Critical,
    /// High business value only.
    High,
    /// High team impact only.
    Medium,
    Low,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Critical,
        Quadrant::High,
        Quadrant::Medium,
        Quadrant::Low,
    ];

    pub fn from_scores(team_impact: Decimal, business_value: Decimal) -> Self {
        let high_impact = team_impact >= QUADRANT_THRESHOLD;
        let high_value = business_value >= QUADRANT_THRESHOLD;
        match (high_impact, high_value) {
            (true, true) => Quadrant::Critical,
            (false, true) => Quadrant::High,
            (true, false) => Quadrant::Medium,
            (false, false) => Quadrant::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::Critical => "CRITICAL",
            Quadrant::High => "HIGH",
            Quadrant::Medium => "MEDIUM",
            Quadrant::Low => "LOW",
        }
    }
}

/// One driver's position in the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPriority {
    pub driver: Driver,
    pub driver_name: String,
    pub score: Decimal,
    pub gap: Decimal,
    pub team_impact_weight: Decimal,
    pub team_impact_score: Decimal,
    pub business_value_weight: Decimal,
    pub business_value_score: Decimal,
    pub quadrant: Quadrant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct QuadrantCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl QuadrantCounts {
    fn record(&mut self, quadrant: Quadrant) {
        match quadrant {
            Quadrant::Critical => self.critical += 1,
            Quadrant::High => self.high += 1,
            Quadrant::Medium => self.medium += 1,
            Quadrant::Low => self.low += 1,
        }
    }

    pub fn get(&self, quadrant: Quadrant) -> usize {
        match quadrant {
            Quadrant::Critical => self.critical,
            Quadrant::High => self.high,
            Quadrant::Medium => self.medium,
            Quadrant::Low => self.low,
        }
    }
}

/// All seven drivers placed in quadrants, in survey order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityMatrix {
    pub industry: Industry,
    pub drivers: Vec<DriverPriority>,
    pub quadrant_counts: QuadrantCounts,
    pub calculated_at: Timestamp,
}

impl PriorityMatrix {
    /// Critical first, then High, Medium, Low; ties by team impact, highest first.
    pub fn drivers_by_priority(&self) -> Vec<&DriverPriority> {
        let mut sorted: Vec<&DriverPriority> = self.drivers.iter().collect();
        sorted.sort_by(|a, b| {
            a.quadrant
                .cmp(&b.quadrant)
                .then_with(|| b.team_impact_score.cmp(&a.team_impact_score))
        });
        sorted
    }

    pub fn get(&self, driver: Driver) -> Option<&DriverPriority> {
        self.drivers.iter().find(|d| d.driver == driver)
    }
}

/// Builds priority matrices from validated driver scores.
pub struct PriorityMatrixCalculator;

impl PriorityMatrixCalculator {
    /// Team performance weight (DeChurch & Mesmer-Magnus 2010 and related
    /// meta-analyses). Identical across industries.
    pub fn team_impact_weight(driver: Driver) -> Decimal {
        let hundredths = match driver {
            Driver::TeamCognition => 100,
            Driver::Trust => 94,
            Driver::CommunicationQuality => 89,
            Driver::Coordination => 83,
            Driver::GoalClarity => 80,
            Driver::PsychologicalSafety => 77,
            Driver::TransactiveMemory => 74,
        };
        Decimal::new(hundredths, 2)
    }

    /// Business value weight of a driver within an industry.
    pub fn business_value_weight(industry: Industry, driver: Driver) -> Decimal {
        // Columns follow Driver::ALL order.
        let row: [i64; 7] = match industry {
            Industry::Technology => [94, 89, 100, 85, 95, 79, 100],
            Industry::Healthcare => [100, 89, 100, 85, 88, 79, 100],
            Industry::FinancialServices => [94, 82, 100, 85, 83, 74, 100],
            Industry::Government => [94, 77, 94, 92, 83, 74, 90],
            Industry::Retail => [100, 82, 94, 80, 83, 69, 85],
            Industry::Manufacturing => [94, 77, 89, 85, 95, 85, 90],
            Industry::ProfessionalServices => [100, 82, 100, 85, 88, 85, 100],
        };
        Decimal::new(row[driver.index()], 2)
    }

    pub fn calculate(scores: &DriverScores, industry: Industry) -> PriorityMatrix {
        let mut quadrant_counts = QuadrantCounts::default();

        let drivers: Vec<DriverPriority> = scores
            .iter()
            .map(|score| {
                let driver = score.driver();
                let gap = (DRIVER_MAX - score.value()).max(Decimal::ZERO);
                let team_impact_weight = Self::team_impact_weight(driver);
                let business_value_weight = Self::business_value_weight(industry, driver);
                let team_impact_score = gap * team_impact_weight;
                let business_value_score = gap * business_value_weight;
                let quadrant = Quadrant::from_scores(team_impact_score, business_value_score);
                quadrant_counts.record(quadrant);

                DriverPriority {
                    driver,
                    driver_name: driver.label().to_string(),
                    score: score.value(),
                    gap,
                    team_impact_weight,
                    team_impact_score,
                    business_value_weight,
                    business_value_score,
                    quadrant,
                }
            })
            .collect();

        PriorityMatrix {
            industry,
            drivers,
            quadrant_counts,
            calculated_at: Timestamp::now(),
        }
    }
}
