//! The six cost components, C1 to C6.
//!
//! Each is `payroll × coefficient × dysfunction share`, where the share is
//! derived from the inverted scores of the drivers that component depends on.
//! Paired components divide the sum of two inversions by 12, the largest
//! possible sum, so every share stays within [0, 1] before industry or
//! business value scaling.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::constants::{COST_COEFFICIENTS, DRIVER_MIN, DRIVER_RANGE, PAIR_INVERSION_MAX};
use super::{
    BusinessValueRatio, DriverScore, DriverScores, EngagementScore, IndustryConfig, Payroll,
};

/// The six components and their undiscounted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostComponents {
    pub productivity: Decimal,
    pub rework: Decimal,
    pub turnover: Decimal,
    pub opportunity: Decimal,
    pub overhead: Decimal,
    pub disengagement: Decimal,
    pub subtotal: Decimal,
}

impl CostComponents {
    /// Components in C1..C6 order.
    pub fn as_array(&self) -> [Decimal; 6] {
        [
            self.productivity,
            self.rework,
            self.turnover,
            self.opportunity,
            self.overhead,
            self.disengagement,
        ]
    }
}

fn pair_share(a: &DriverScore, b: &DriverScore) -> Decimal {
    (a.invert() + b.invert()) / PAIR_INVERSION_MAX
}

pub struct CostComponentService;

impl CostComponentService {
    /// C1 = P × 0.25 × (1 − R), R the normalized mean of all seven scores.
    pub fn calculate_productivity_loss(payroll: &Payroll, scores: &DriverScores) -> Decimal {
        let readiness = (scores.mean() - DRIVER_MIN) / DRIVER_RANGE;
        payroll.times(COST_COEFFICIENTS.productivity * (Decimal::ONE - readiness))
    }

    /// C2, driven by Communication and Team Cognition.
    pub fn calculate_rework_costs(payroll: &Payroll, scores: &DriverScores) -> Decimal {
        let share = pair_share(&scores.comm_quality, &scores.team_cognition);
        payroll.times(COST_COEFFICIENTS.rework * share)
    }

    /// C3, driven by Trust and Psychological Safety, scaled by ρ.
    pub fn calculate_turnover_costs(
        payroll: &Payroll,
        scores: &DriverScores,
        industry: &IndustryConfig,
    ) -> Decimal {
        let share = pair_share(&scores.trust, &scores.psych_safety);
        payroll.times(COST_COEFFICIENTS.turnover * share * industry.rho)
    }

    /// C4, driven by Coordination and Goal Clarity, scaled by business value.
    pub fn calculate_opportunity_costs(
        payroll: &Payroll,
        scores: &DriverScores,
        business_value: &BusinessValueRatio,
    ) -> Decimal {
        let share = pair_share(&scores.coordination, &scores.goal_clarity);
        payroll.times(COST_COEFFICIENTS.opportunity * share * business_value.value())
    }

    /// C5, driven by Transactive Memory and Communication.
    pub fn calculate_overhead_costs(payroll: &Payroll, scores: &DriverScores) -> Decimal {
        let share = pair_share(&scores.tms, &scores.comm_quality);
        payroll.times(COST_COEFFICIENTS.overhead * share)
    }

    /// C6 = P × sigmoid coefficient × (7 − E) / 6.
    pub fn calculate_disengagement_costs(
        payroll: &Payroll,
        engagement: &EngagementScore,
    ) -> Decimal {
        payroll.times(engagement.coefficient() * engagement.adjustment_factor())
    }

    pub fn calculate_all(
        payroll: &Payroll,
        scores: &DriverScores,
        industry: &IndustryConfig,
        business_value: &BusinessValueRatio,
        engagement: &EngagementScore,
    ) -> CostComponents {
        let productivity = Self::calculate_productivity_loss(payroll, scores);
        let rework = Self::calculate_rework_costs(payroll, scores);
        let turnover = Self::calculate_turnover_costs(payroll, scores, industry);
        let opportunity = Self::calculate_opportunity_costs(payroll, scores, business_value);
        let overhead = Self::calculate_overhead_costs(payroll, scores);
        let disengagement = Self::calculate_disengagement_costs(payroll, engagement);

        CostComponents {
            productivity,
            rework,
            turnover,
            opportunity,
            overhead,
            disengagement,
            subtotal: productivity + rework + turnover + opportunity + overhead + disengagement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dysfunction::{DomainFactory, Driver, IndustryRegistry, RawDriverScores};

    fn payroll() -> Payroll {
        DomainFactory::create_payroll(1_000_000.0).unwrap()
    }

    fn scores(raw: RawDriverScores) -> DriverScores {
        DomainFactory::create_driver_scores(&raw).unwrap()
    }

    #[test]
    fn mid_scale_components_are_exact() {
        let p = payroll();
        let s = scores(RawDriverScores::uniform(4.0));
        let industry = IndustryRegistry::get_industry_config("Technology");
        let bv = BusinessValueRatio::neutral();
        let engagement = DomainFactory::create_engagement_score(&s);

        let c = CostComponentService::calculate_all(&p, &s, &industry, &bv, &engagement);

        assert_eq!(c.productivity, Decimal::from(125_000));
        assert_eq!(c.rework, Decimal::from(50_000));
        assert_eq!(c.turnover, Decimal::from(120_750));
        assert_eq!(c.opportunity, Decimal::from(75_000));
        assert_eq!(c.overhead, Decimal::from(60_000));
        assert_eq!(c.disengagement, Decimal::from(45_000));
        assert_eq!(c.subtotal, Decimal::from(475_750));
    }

    #[test]
    fn perfect_scores_cost_nothing() {
        let p = payroll();
        let s = scores(RawDriverScores::uniform(7.0));
        let industry = IndustryRegistry::default_industry();
        let engagement = DomainFactory::create_engagement_score(&s);

        let c = CostComponentService::calculate_all(
            &p,
            &s,
            &industry,
            &BusinessValueRatio::neutral(),
            &engagement,
        );
        for component in c.as_array() {
            assert_eq!(component, Decimal::ZERO);
        }
        assert_eq!(c.subtotal, Decimal::ZERO);
    }

    #[test]
    fn worst_scores_hit_each_coefficient() {
        let p = payroll();
        let s = scores(RawDriverScores::uniform(1.0));
        assert_eq!(
            CostComponentService::calculate_productivity_loss(&p, &s),
            Decimal::from(250_000)
        );
        assert_eq!(CostComponentService::calculate_rework_costs(&p, &s), Decimal::from(100_000));
        assert_eq!(CostComponentService::calculate_overhead_costs(&p, &s), Decimal::from(120_000));
    }

    #[test]
    fn turnover_scales_with_rho() {
        let p = payroll();
        let s = scores(RawDriverScores::uniform(1.0));
        let healthcare = IndustryRegistry::get_industry_config("Healthcare");
        assert_eq!(
            CostComponentService::calculate_turnover_costs(&p, &s, &healthcare),
            Decimal::from(262_500)
        );
    }

    #[test]
    fn opportunity_scales_with_business_value() {
        let p = payroll();
        let s = scores(RawDriverScores::uniform(4.0));
        let bv = DomainFactory::create_business_value_ratio(Some(4_000_000.0), &p);
        assert_eq!(
            CostComponentService::calculate_opportunity_costs(&p, &s, &bv),
            Decimal::from(300_000)
        );
    }

    #[test]
    fn rework_ignores_unrelated_drivers() {
        let p = payroll();
        let base = scores(RawDriverScores::uniform(4.0));
        let changed = scores(RawDriverScores::uniform(4.0).with(Driver::Trust, 1.0));
        assert_eq!(
            CostComponentService::calculate_rework_costs(&p, &base),
            CostComponentService::calculate_rework_costs(&p, &changed)
        );
    }
}
