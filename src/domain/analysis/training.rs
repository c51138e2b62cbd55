//! Training Recommendation - program sizing and ROI against the dysfunction cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PriorityMatrix;

/// A training program format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainingType {
    HalfDay,
    FullDay,
    MonthLong,
    /// Treated like a full day for cost, covering every driver.
    NotSure,
}

impl TrainingType {
    pub const ALL: [TrainingType; 4] = [
        TrainingType::HalfDay,
        TrainingType::FullDay,
        TrainingType::MonthLong,
        TrainingType::NotSure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingType::HalfDay => "half-day",
            TrainingType::FullDay => "full-day",
            TrainingType::MonthLong => "month-long",
            TrainingType::NotSure => "not-sure",
        }
    }

    /// Base program cost in dollars.
    pub fn cost(&self) -> Decimal {
        match self {
            TrainingType::HalfDay => Decimal::from(5_000),
            TrainingType::FullDay | TrainingType::NotSure => Decimal::from(10_000),
            TrainingType::MonthLong => Decimal::from(50_000),
        }
    }

    /// Expected share of the dysfunction cost recovered.
    pub fn improvement_rate(&self) -> Decimal {
        match self {
            TrainingType::HalfDay => Decimal::new(15, 2),
            TrainingType::FullDay | TrainingType::NotSure => Decimal::new(25, 2),
            TrainingType::MonthLong => Decimal::new(85, 2),
        }
    }

    /// How many top-priority drivers the program covers.
    pub fn focus_driver_count(&self) -> usize {
        match self {
            TrainingType::HalfDay => 1,
            TrainingType::FullDay => 2,
            TrainingType::MonthLong | TrainingType::NotSure => 7,
        }
    }

    pub fn deliverables(&self) -> &'static [&'static str] {
        match self {
            TrainingType::HalfDay => &[
                "Interactive workshop focused on top priority driver",
                "Team assessment debrief and action planning",
                "Quick-win strategies and implementation roadmap",
                "Follow-up resources and tools",
            ],
            TrainingType::FullDay => &[
                "Comprehensive workshop covering top 2 priority drivers",
                "Team assessment deep-dive analysis",
                "Customized action plan with 30-60-90 day milestones",
                "Team charter and working agreements",
                "Implementation toolkit and resources",
                "30-day follow-up coaching session",
            ],
            TrainingType::MonthLong => &[
                "Multi-session program addressing all 7 drivers",
                "Weekly coaching sessions with team leader",
                "Custom team playbook and operating system",
                "Behavioral assessments and 360° feedback",
                "Team charter, norms, and decision-making frameworks",
                "Conflict resolution and communication protocols",
                "Goal-setting and accountability structures",
                "Quarterly review and continuous improvement plan",
                "90-day post-program support",
            ],
            TrainingType::NotSure => &[
                "Consultation to determine optimal program",
                "Detailed assessment review and recommendations",
                "Customized proposal based on team needs",
            ],
        }
    }
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrainingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrainingType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown training type: {}", s))
    }
}

/// Return on a training investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiCalculation {
    pub current_dysfunction_cost: Decimal,
    pub estimated_improvement: Decimal,
    pub estimated_savings: Decimal,
    pub training_cost: Decimal,
    pub roi: Decimal,
    pub roi_percentage: Decimal,
    /// Months to recover the cost; `None` when nothing is saved.
    pub payback_months: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecommendation {
    pub training_type: TrainingType,
    pub focus_drivers: Vec<String>,
    pub estimated_cost: Decimal,
    pub estimated_savings: Decimal,
    pub roi: Decimal,
    pub roi_percentage: Decimal,
    pub payback_months: Option<Decimal>,
    pub deliverables: Vec<String>,
}

pub struct TrainingRecommender;

impl TrainingRecommender {
    /// Savings assume the dysfunction cost is annual.
    pub fn calculate_roi(dysfunction_cost: Decimal, training_type: TrainingType) -> RoiCalculation {
        let improvement = training_type.improvement_rate();
        let training_cost = training_type.cost();
        let savings = dysfunction_cost * improvement;
        let roi = savings - training_cost;
        let monthly_savings = savings / Decimal::from(12);

        RoiCalculation {
            current_dysfunction_cost: dysfunction_cost,
            estimated_improvement: improvement,
            estimated_savings: savings,
            training_cost,
            roi,
            roi_percentage: roi / training_cost * Decimal::ONE_HUNDRED,
            payback_months: training_cost.checked_div(monthly_savings),
        }
    }

    pub fn generate(
        training_type: TrainingType,
        dysfunction_cost: Decimal,
        matrix: &PriorityMatrix,
    ) -> TrainingRecommendation {
        let roi = Self::calculate_roi(dysfunction_cost, training_type);
        let focus_drivers = matrix
            .drivers_by_priority()
            .into_iter()
            .take(training_type.focus_driver_count())
            .map(|d| d.driver_name.clone())
            .collect();

        TrainingRecommendation {
            training_type,
            focus_drivers,
            estimated_cost: roi.training_cost,
            estimated_savings: roi.estimated_savings,
            roi: roi.roi,
            roi_percentage: roi.roi_percentage,
            payback_months: roi.payback_months,
            deliverables: training_type
                .deliverables()
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }

    /// One recommendation per training type, in `TrainingType::ALL` order.
    pub fn generate_all(
        dysfunction_cost: Decimal,
        matrix: &PriorityMatrix,
    ) -> Vec<TrainingRecommendation> {
        TrainingType::ALL
            .into_iter()
            .map(|t| Self::generate(t, dysfunction_cost, matrix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::PriorityMatrixCalculator;
    use crate::domain::dysfunction::{DomainFactory, Industry, RawDriverScores};

    fn matrix() -> PriorityMatrix {
        let scores = DomainFactory::create_driver_scores(&RawDriverScores::uniform(4.0)).unwrap();
        PriorityMatrixCalculator::calculate(&scores, Industry::Technology)
    }

    #[test]
    fn half_day_roi() {
        let roi = TrainingRecommender::calculate_roi(Decimal::from(100_000), TrainingType::HalfDay);
        assert_eq!(roi.estimated_savings, Decimal::from(15_000));
        assert_eq!(roi.roi, Decimal::from(10_000));
        assert_eq!(roi.roi_percentage, Decimal::from(200));
        assert_eq!(roi.payback_months, Some(Decimal::from(4)));
    }

    #[test]
    fn zero_cost_has_no_payback() {
        let roi = TrainingRecommender::calculate_roi(Decimal::ZERO, TrainingType::FullDay);
        assert_eq!(roi.estimated_savings, Decimal::ZERO);
        assert_eq!(roi.roi, Decimal::from(-10_000));
        assert_eq!(roi.roi_percentage, Decimal::from(-100));
        assert_eq!(roi.payback_months, None);
    }

    #[test]
    fn focus_drivers_follow_priority_order() {
        let cost = Decimal::from(500_000);
        let rec = TrainingRecommender::generate(TrainingType::FullDay, cost, &matrix());
        assert_eq!(rec.focus_drivers, vec!["Team Cognition", "Trust"]);
        assert_eq!(rec.deliverables.len(), 6);
    }

    #[test]
    fn month_long_covers_every_driver() {
        let cost = Decimal::from(500_000);
        let rec = TrainingRecommender::generate(TrainingType::MonthLong, cost, &matrix());
        assert_eq!(rec.focus_drivers.len(), 7);
        assert_eq!(rec.estimated_cost, Decimal::from(50_000));
        assert_eq!(rec.estimated_savings, Decimal::from(425_000));
    }

    #[test]
    fn generate_all_covers_each_type() {
        let all = TrainingRecommender::generate_all(Decimal::from(500_000), &matrix());
        let types: Vec<TrainingType> = all.iter().map(|r| r.training_type).collect();
        assert_eq!(types, TrainingType::ALL.to_vec());
    }

    #[test]
    fn parses_and_serializes_kebab_case() {
        assert_eq!("month-long".parse::<TrainingType>().unwrap(), TrainingType::MonthLong);
        assert!("weekend".parse::<TrainingType>().is_err());
        assert_eq!(serde_json::to_string(&TrainingType::NotSure).unwrap(), "\"not-sure\"");
    }
}
