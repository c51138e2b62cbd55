//! Independent multipliers applied to the discounted subtotal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AnomalyScore, FourCsMultiplier, TeamSize};

/// The three engine multipliers; φ is applied separately from the industry config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplierSet {
    pub four_cs: Decimal,
    pub team_size: Decimal,
    pub gaming: Decimal,
}

pub struct MultiplierService;

impl MultiplierService {
    pub fn calculate_four_cs_multiplier(four_cs: &FourCsMultiplier) -> Decimal {
        four_cs.value()
    }

    /// η(N).
    pub fn calculate_team_size_factor(team_size: &TeamSize) -> Decimal {
        team_size.efficiency_factor()
    }

    /// G, between 1.0 and 1.5.
    pub fn calculate_gaming_penalty(anomaly: &AnomalyScore) -> Decimal {
        anomaly.penalty_multiplier()
    }

    pub fn calculate_all(
        four_cs: &FourCsMultiplier,
        team_size: &TeamSize,
        anomaly: &AnomalyScore,
    ) -> MultiplierSet {
        MultiplierSet {
            four_cs: Self::calculate_four_cs_multiplier(four_cs),
            team_size: Self::calculate_team_size_factor(team_size),
            gaming: Self::calculate_gaming_penalty(anomaly),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dysfunction::{DomainFactory, FourCsScores, RawDriverScores};

    #[test]
    fn neutral_inputs_give_unit_multipliers() {
        let four_cs = DomainFactory::create_four_cs_multiplier(None).unwrap();
        let team_size = DomainFactory::create_team_size(8.0).unwrap();
        let scores = DomainFactory::create_driver_scores(&RawDriverScores::uniform(4.0)).unwrap();
        let anomaly = DomainFactory::create_anomaly_score(&scores);

        let set = MultiplierService::calculate_all(&four_cs, &team_size, &anomaly);
        assert_eq!(set.four_cs, Decimal::ONE);
        assert_eq!(set.team_size, Decimal::ONE);
        assert_eq!(set.gaming, Decimal::ONE);
    }

    #[test]
    fn each_multiplier_reflects_its_own_input() {
        let four_cs =
            DomainFactory::create_four_cs_multiplier(Some(&FourCsScores::uniform(3.5))).unwrap();
        let team_size = DomainFactory::create_team_size(3.0).unwrap();
        let scores = DomainFactory::create_driver_scores(&RawDriverScores::from_values([
            7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 1.0,
        ]))
        .unwrap();
        let anomaly = DomainFactory::create_anomaly_score(&scores);

        let set = MultiplierService::calculate_all(&four_cs, &team_size, &anomaly);
        assert_eq!(set.four_cs, Decimal::new(125, 2));
        assert_eq!(set.team_size, Decimal::new(12, 1));
        assert_eq!(set.gaming, Decimal::new(12, 1));
    }

    #[test]
    fn team_size_factor_grows_past_twelve() {
        let n25 = DomainFactory::create_team_size(25.0).unwrap();
        assert!(MultiplierService::calculate_team_size_factor(&n25) > Decimal::ONE);
    }
}
