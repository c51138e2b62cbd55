//! Request and result shapes of the cost engine.
//!
//! Inputs are plain numbers and strings as they arrive over JSON. Results
//! carry exact decimals, serialized as strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    ConfidenceInterval, CostComponents, EngagementCategory, FourCsScores, Industry,
    RawDriverScores,
};
use crate::domain::foundation::Timestamp;

fn default_industry() -> String {
    Industry::DEFAULT.name().to_string()
}

/// Everything the engine needs for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    /// Annual team payroll.
    pub payroll: f64,
    pub team_size: f64,
    pub driver_scores: RawDriverScores,
    #[serde(default = "default_industry")]
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub four_cs_scores: Option<FourCsScores>,
}

impl CalculationInput {
    pub fn new(
        payroll: f64,
        team_size: f64,
        driver_scores: RawDriverScores,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            payroll,
            team_size,
            driver_scores,
            industry: industry.into(),
            revenue: None,
            four_cs_scores: None,
        }
    }

    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = Some(revenue);
        self
    }

    pub fn with_four_cs(mut self, scores: FourCsScores) -> Self {
        self.four_cs_scores = Some(scores);
        self
    }
}

/// The six components plus the discounted subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    #[serde(flatten)]
    pub components: CostComponents,
    pub subtotal_with_discount: Decimal,
}

/// Every factor applied on top of the discounted subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedMultipliers {
    pub four_cs: Decimal,
    /// φ of the resolved industry.
    pub industry: Decimal,
    pub team_size: Decimal,
    pub gaming: Decimal,
    /// Feeds C4 only; reported for transparency.
    pub business_value_ratio: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementSummary {
    pub score: Decimal,
    pub category: EngagementCategory,
    pub coefficient: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalySummary {
    pub score: Decimal,
    pub has_anomaly: bool,
    pub penalty: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationMetadata {
    pub version: String,
    pub timestamp: Timestamp,
    /// Name of the industry actually used.
    pub industry: String,
    /// False when the requested label was unknown and the default was used.
    pub industry_matched: bool,
}

/// Total Cost of Dysfunction with its full decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Final cost, capped at 3.5x payroll.
    pub tcd: Decimal,
    pub tcd_raw: Decimal,
    pub capped: bool,
    pub cost_components: CostBreakdown,
    pub multipliers: AppliedMultipliers,
    pub engagement: EngagementSummary,
    pub anomaly: AnomalySummary,
    pub confidence_interval: ConfidenceInterval,
    pub metadata: CalculationMetadata,
}
