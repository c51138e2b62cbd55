//! Total Cost of Dysfunction orchestration and the readiness score.
//!
//! The engine is pure: every call builds fresh value objects, performs no
//! I/O and shares no state, so it may be called from any number of threads.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use super::constants::{
    FORMULA_VERSION, OVERLAP_DISCOUNT, READINESS_DECIMAL_PLACES, TCD_UPPER_BOUND_MULTIPLIER,
};
use super::{
    AnomalySummary, AppliedMultipliers, CalculationError, CalculationInput, CalculationMetadata,
    CalculationResult, ConfidenceInterval, CostBreakdown, CostComponentService, DomainFactory,
    DriverScores, EngagementSummary, IndustryRegistry, MultiplierService, RawDriverScores,
    ValidationError, ValidationService,
};
use crate::domain::foundation::Timestamp;

fn checked_product(factors: &[Decimal], stage: &'static str) -> Result<Decimal, CalculationError> {
    factors
        .iter()
        .try_fold(Decimal::ONE, |acc, factor| acc.checked_mul(*factor))
        .ok_or(CalculationError::Overflow { stage })
}

pub struct CalculationService;

impl CalculationService {
    /// Runs the full pipeline. Any validation failure aborts the calculation.
    pub fn calculate(input: &CalculationInput) -> Result<CalculationResult, CalculationError> {
        ValidationService::validate(input)?;

        let scores = DomainFactory::create_driver_scores(&input.driver_scores)?;
        let team_size = DomainFactory::create_team_size(input.team_size)?;
        let payroll = DomainFactory::create_payroll(input.payroll)?;
        let business_value = DomainFactory::create_business_value_ratio(input.revenue, &payroll);
        let industry = DomainFactory::create_industry_config(&input.industry);
        let four_cs = DomainFactory::create_four_cs_multiplier(input.four_cs_scores.as_ref())?;

        let engagement = DomainFactory::create_engagement_score(&scores);
        let anomaly = DomainFactory::create_anomaly_score(&scores);
        if anomaly.has_anomaly() {
            warn!(
                anomaly_score = %anomaly.value(),
                penalty = %anomaly.penalty_multiplier(),
                "Inconsistent driver scores, applying gaming penalty"
            );
        }

        let components = CostComponentService::calculate_all(
            &payroll,
            &scores,
            &industry,
            &business_value,
            &engagement,
        );
        let subtotal_with_discount = components.subtotal * OVERLAP_DISCOUNT;
        debug!(
            subtotal = %components.subtotal,
            subtotal_with_discount = %subtotal_with_discount,
            "Cost components calculated"
        );

        let multipliers = MultiplierService::calculate_all(&four_cs, &team_size, &anomaly);

        let tcd_raw = checked_product(
            &[
                subtotal_with_discount,
                multipliers.four_cs,
                industry.phi,
                multipliers.team_size,
                multipliers.gaming,
            ],
            "raw TCD",
        )?;

        let upper_bound = payroll.times(TCD_UPPER_BOUND_MULTIPLIER);
        let capped = tcd_raw > upper_bound;
        let tcd = tcd_raw.min(upper_bound);
        if capped {
            warn!(
                tcd_raw = %tcd_raw,
                upper_bound = %upper_bound,
                "Raw TCD exceeds 3.5x payroll, capping"
            );
        }
        debug!(tcd_raw = %tcd_raw, tcd = %tcd, industry = industry.name(), "TCD calculated");

        Ok(CalculationResult {
            tcd,
            tcd_raw,
            capped,
            cost_components: CostBreakdown {
                components,
                subtotal_with_discount,
            },
            multipliers: AppliedMultipliers {
                four_cs: multipliers.four_cs,
                industry: industry.phi,
                team_size: multipliers.team_size,
                gaming: multipliers.gaming,
                business_value_ratio: business_value.value(),
            },
            engagement: EngagementSummary {
                score: engagement.value(),
                category: engagement.category(),
                coefficient: engagement.coefficient(),
            },
            anomaly: AnomalySummary {
                score: anomaly.value(),
                has_anomaly: anomaly.has_anomaly(),
                penalty: anomaly.penalty_multiplier(),
            },
            confidence_interval: ConfidenceInterval::from_tcd(tcd),
            metadata: CalculationMetadata {
                version: FORMULA_VERSION.to_string(),
                timestamp: Timestamp::now(),
                industry: industry.name().to_string(),
                industry_matched: IndustryRegistry::has_industry(&input.industry),
            },
        })
    }

    /// Weighted readiness, `Σ score / 7 × weight`, rounded to 4 places.
    ///
    /// Independent of the TCD pipeline. Always within [1/7, 1].
    pub fn calculate_readiness_score(scores: &DriverScores) -> Decimal {
        let seven = Decimal::from(7);
        scores
            .iter()
            .map(|score| score.value() / seven * score.driver().readiness_weight())
            .sum::<Decimal>()
            .round_dp_with_strategy(
                READINESS_DECIMAL_PLACES,
                RoundingStrategy::MidpointAwayFromZero,
            )
    }

    /// Readiness straight from submitted answers; every driver must be present.
    pub fn readiness_from_raw(raw: &RawDriverScores) -> Result<Decimal, ValidationError> {
        let scores = DomainFactory::create_driver_scores(raw)?;
        Ok(Self::calculate_readiness_score(&scores))
    }
}
