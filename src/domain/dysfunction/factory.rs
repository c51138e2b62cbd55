//! The one place raw primitives become value objects.

use super::{
    AnomalyScore, BusinessValueRatio, Driver, DriverScore, DriverScores, EngagementScore,
    FourCsMultiplier, FourCsScores, IndustryConfig, IndustryRegistry, Payroll, RawDriverScores,
    TeamSize, ValidationError,
};

/// Builds validated, clamped value objects from request primitives.
pub struct DomainFactory;

impl DomainFactory {
    pub fn create_driver_score(driver: Driver, raw: f64) -> Result<DriverScore, ValidationError> {
        DriverScore::new(driver, raw)
    }

    /// Requires all seven answers. Out-of-range values are clamped.
    pub fn create_driver_scores(raw: &RawDriverScores) -> Result<DriverScores, ValidationError> {
        let score = |driver: Driver| -> Result<DriverScore, ValidationError> {
            let value = raw
                .get(driver)
                .ok_or_else(|| ValidationError::missing_driver_score(driver))?;
            DriverScore::new(driver, value)
        };

        Ok(DriverScores {
            trust: score(Driver::Trust)?,
            psych_safety: score(Driver::PsychologicalSafety)?,
            comm_quality: score(Driver::CommunicationQuality)?,
            goal_clarity: score(Driver::GoalClarity)?,
            coordination: score(Driver::Coordination)?,
            tms: score(Driver::TransactiveMemory)?,
            team_cognition: score(Driver::TeamCognition)?,
        })
    }

    pub fn create_team_size(raw: f64) -> Result<TeamSize, ValidationError> {
        TeamSize::new(raw)
    }

    pub fn create_payroll(raw: f64) -> Result<Payroll, ValidationError> {
        Payroll::new(raw)
    }

    pub fn create_business_value_ratio(
        revenue: Option<f64>,
        payroll: &Payroll,
    ) -> BusinessValueRatio {
        BusinessValueRatio::new(revenue, payroll)
    }

    pub fn create_engagement_score(scores: &DriverScores) -> EngagementScore {
        EngagementScore::new(&scores.trust, &scores.psych_safety)
    }

    pub fn create_anomaly_score(scores: &DriverScores) -> AnomalyScore {
        AnomalyScore::new(scores)
    }

    pub fn create_four_cs_multiplier(
        scores: Option<&FourCsScores>,
    ) -> Result<FourCsMultiplier, ValidationError> {
        FourCsMultiplier::new(scores)
    }

    pub fn create_industry_config(name: &str) -> IndustryConfig {
        IndustryRegistry::get_industry_config(name)
    }
}
