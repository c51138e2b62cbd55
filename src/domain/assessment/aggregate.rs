//! Assessment record.
//!
//! One completed survey: who answered, the raw answers, the headline results
//! and the analysis derived from them. Assessments are immutable once built.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AssessmentResults, CompanyInfo, IndustryDetection, TeamMetrics};
use crate::domain::analysis::{PriorityMatrix, TrainingRecommendation, TrainingType};
use crate::domain::dysfunction::RawDriverScores;
use crate::domain::foundation::{AssessmentId, Timestamp};

/// A stored team assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    id: AssessmentId,
    company: CompanyInfo,
    team: TeamMetrics,
    training_type: TrainingType,
    driver_scores: RawDriverScores,
    results: AssessmentResults,
    industry: IndustryDetection,
    priority_matrix: PriorityMatrix,
    recommendation: TrainingRecommendation,
    created_at: Timestamp,
}

impl Assessment {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: AssessmentId,
        company: CompanyInfo,
        team: TeamMetrics,
        training_type: TrainingType,
        driver_scores: RawDriverScores,
        results: AssessmentResults,
        industry: IndustryDetection,
        priority_matrix: PriorityMatrix,
        recommendation: TrainingRecommendation,
    ) -> Self {
        Self {
            id,
            company,
            team,
            training_type,
            driver_scores,
            results,
            industry,
            priority_matrix,
            recommendation,
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn company(&self) -> &CompanyInfo {
        &self.company
    }

    pub fn team(&self) -> &TeamMetrics {
        &self.team
    }

    pub fn training_type(&self) -> TrainingType {
        self.training_type
    }

    pub fn driver_scores(&self) -> &RawDriverScores {
        &self.driver_scores
    }

    pub fn results(&self) -> &AssessmentResults {
        &self.results
    }

    pub fn industry(&self) -> &IndustryDetection {
        &self.industry
    }

    pub fn priority_matrix(&self) -> &PriorityMatrix {
        &self.priority_matrix
    }

    pub fn recommendation(&self) -> &TrainingRecommendation {
        &self.recommendation
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn total_payroll(&self) -> Decimal {
        self.team.total_payroll()
    }

    pub fn has_email(&self) -> bool {
        self.company.email().is_some()
    }

    pub fn has_website(&self) -> bool {
        self.company.website().is_some()
    }

    /// Path of the results page for this assessment.
    pub fn results_path(&self) -> String {
        format!("/results/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{PriorityMatrixCalculator, TrainingRecommender};
    use crate::domain::dysfunction::{DomainFactory, Industry};

    fn assessment(company: CompanyInfo) -> Assessment {
        let raw = RawDriverScores::uniform(4.0);
        let scores = DomainFactory::create_driver_scores(&raw).unwrap();
        let matrix = PriorityMatrixCalculator::calculate(&scores, Industry::Technology);
        let results = AssessmentResults::fallback(Decimal::new(5714, 4), Decimal::from(500_000));
        let recommendation =
            TrainingRecommender::generate(TrainingType::FullDay, results.dysfunction_cost, &matrix);

        Assessment::new(
            AssessmentId::new(),
            company,
            TeamMetrics::new(5, 100_000.0).unwrap(),
            TrainingType::FullDay,
            raw,
            results,
            IndustryDetection {
                industry: "Technology".to_string(),
                confidence: 0.9,
            },
            matrix,
            recommendation,
        )
    }

    #[test]
    fn total_payroll_uses_team_metrics() {
        let a = assessment(CompanyInfo::new("Acme"));
        assert_eq!(a.total_payroll(), Decimal::from(500_000));
    }

    #[test]
    fn contact_flags() {
        let bare = assessment(CompanyInfo::new("Acme"));
        assert!(!bare.has_email());
        assert!(!bare.has_website());

        let full = assessment(
            CompanyInfo::new("Acme")
                .with_email("ops@acme.io")
                .with_website("acme.io"),
        );
        assert!(full.has_email());
        assert!(full.has_website());
    }

    #[test]
    fn results_path_embeds_id() {
        let a = assessment(CompanyInfo::new("Acme"));
        assert_eq!(a.results_path(), format!("/results/{}", a.id()));
    }

    #[test]
    fn serializes_in_camel_case() {
        let json = serde_json::to_value(assessment(CompanyInfo::new("Acme"))).unwrap();
        assert_eq!(json["trainingType"], "full-day");
        assert_eq!(json["results"]["usedFallback"], true);
        assert!(json["createdAt"].is_string());
    }
}
