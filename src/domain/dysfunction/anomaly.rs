//! Gaming detection over correlated driver pairs.
//!
//! Trust and Psychological Safety, Communication and Coordination, and Goal
//! Clarity and Team Cognition move together in genuine responses. A gap
//! wider than the pair's tolerance contributes its excess to the score.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::constants::GAMING_DETECTION;
use super::{DriverScore, DriverScores};

/// Excess divergence per correlated pair, and their total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyScore {
    trust_psych_excess: Decimal,
    comm_coord_excess: Decimal,
    goal_cognition_excess: Decimal,
}

fn excess(a: &DriverScore, b: &DriverScore, tolerance: Decimal) -> Decimal {
    ((a.value() - b.value()).abs() - tolerance).max(Decimal::ZERO)
}

impl AnomalyScore {
    pub(crate) fn new(scores: &DriverScores) -> Self {
        let g = GAMING_DETECTION;
        Self {
            trust_psych_excess: excess(
                &scores.trust,
                &scores.psych_safety,
                g.trust_psych_tolerance,
            ),
            comm_coord_excess: excess(
                &scores.comm_quality,
                &scores.coordination,
                g.comm_coord_tolerance,
            ),
            goal_cognition_excess: excess(
                &scores.goal_clarity,
                &scores.team_cognition,
                g.goal_cognition_tolerance,
            ),
        }
    }

    /// Sum of the three excesses. Zero means nothing suspicious.
    pub fn value(&self) -> Decimal {
        self.trust_psych_excess + self.comm_coord_excess + self.goal_cognition_excess
    }

    pub fn trust_psych_excess(&self) -> Decimal {
        self.trust_psych_excess
    }

    pub fn comm_coord_excess(&self) -> Decimal {
        self.comm_coord_excess
    }

    pub fn goal_cognition_excess(&self) -> Decimal {
        self.goal_cognition_excess
    }

    pub fn has_anomaly(&self) -> bool {
        self.value() > GAMING_DETECTION.anomaly_threshold
    }

    /// G = min(1.5, 1 + 0.1 * max(0, total - 1.5)).
    pub fn penalty_multiplier(&self) -> Decimal {
        let g = GAMING_DETECTION;
        let over = (self.value() - g.anomaly_threshold).max(Decimal::ZERO);
        (Decimal::ONE + g.penalty_rate * over).min(g.max_penalty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dysfunction::DomainFactory;
    use crate::domain::dysfunction::RawDriverScores;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn anomaly(values: [f64; 7]) -> AnomalyScore {
        let scores = DomainFactory::create_driver_scores(&RawDriverScores::from_values(values))
            .unwrap();
        AnomalyScore::new(&scores)
    }

    #[test]
    fn consistent_scores_have_no_anomaly() {
        let score = anomaly([4.0, 4.5, 4.2, 4.0, 4.3, 4.1, 4.4]);
        assert_eq!(score.value(), Decimal::ZERO);
        assert!(!score.has_anomaly());
        assert_eq!(score.penalty_multiplier(), Decimal::ONE);
    }

    #[test]
    fn only_excess_over_tolerance_counts() {
        // trust 7 vs psych 5: gap 2.0, tolerance 1.5
        let score = anomaly([7.0, 5.0, 4.0, 4.0, 4.0, 4.0, 4.0]);
        assert_eq!(score.trust_psych_excess(), dec("0.5"));
        assert_eq!(score.value(), dec("0.5"));
    }

    #[test]
    fn single_outlier_is_detected() {
        // goal clarity 7 vs team cognition 1: gap 6, tolerance 2.5
        let score = anomaly([7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 1.0]);
        assert_eq!(score.goal_cognition_excess(), dec("3.5"));
        assert!(score.value() > dec("0.3"));
        assert!(score.has_anomaly());
        assert_eq!(score.penalty_multiplier(), dec("1.2"));
    }

    #[test]
    fn penalty_is_capped() {
        // every pair at maximum divergence: 4.5 + 4.0 + 3.5 = 12
        let score = anomaly([7.0, 1.0, 7.0, 7.0, 1.0, 4.0, 1.0]);
        assert_eq!(score.value(), dec("12"));
        assert_eq!(score.penalty_multiplier(), dec("1.5"));
    }

    #[test]
    fn threshold_is_exclusive() {
        // trust 1 vs psych 4: gap 3, excess exactly 1.5
        let score = anomaly([1.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0]);
        assert_eq!(score.value(), dec("1.5"));
        assert!(!score.has_anomaly());
        assert_eq!(score.penalty_multiplier(), Decimal::ONE);
    }
}
