//! CreateAssessmentHandler - Command handler for scoring and storing a survey.

use std::sync::Arc;

use tokio::time::timeout;
use tracing::{info, warn};

use crate::config::AssessmentConfig;
use crate::domain::analysis::{PriorityMatrixCalculator, TrainingRecommender, TrainingType};
use crate::domain::assessment::{
    Assessment, AssessmentResults, CompanyInfo, IndustryDetection, TeamMetrics,
};
use crate::domain::dysfunction::{
    CalculationInput, CalculationService, DomainFactory, FourCsScores, Industry,
    IndustryRegistry, RawDriverScores,
};
use crate::domain::foundation::{AssessmentId, DomainError};
use crate::ports::{AssessmentRepository, IndustryClassification, IndustryClassifier};

/// Command to create a new assessment.
#[derive(Debug, Clone)]
pub struct CreateAssessmentCommand {
    pub company: CompanyInfo,
    pub team_size: u32,
    pub average_salary: f64,
    /// Falls back to the configured default when absent.
    pub training_type: Option<TrainingType>,
    pub driver_scores: RawDriverScores,
    pub revenue: Option<f64>,
    pub four_cs_scores: Option<FourCsScores>,
}

/// Result of successful assessment creation.
#[derive(Debug, Clone)]
pub struct CreateAssessmentResult {
    pub assessment_id: AssessmentId,
    /// `/results/{id}`
    pub redirect_url: String,
    pub assessment: Assessment,
}

/// Handler for creating assessments.
pub struct CreateAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
    classifier: Arc<dyn IndustryClassifier>,
    config: AssessmentConfig,
}

impl CreateAssessmentHandler {
    pub fn new(
        repository: Arc<dyn AssessmentRepository>,
        classifier: Arc<dyn IndustryClassifier>,
        config: AssessmentConfig,
    ) -> Self {
        Self {
            repository,
            classifier,
            config,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateAssessmentCommand,
    ) -> Result<CreateAssessmentResult, DomainError> {
        // 1. Validate team metrics
        let team = TeamMetrics::new(cmd.team_size, cmd.average_salary)?;

        // 2. Readiness (every driver must be answered)
        let scores = DomainFactory::create_driver_scores(&cmd.driver_scores)?;
        let readiness = CalculationService::calculate_readiness_score(&scores);

        // 3. Industry
        let classification = self.classify(cmd.company.website()).await;

        // 4. Total Cost of Dysfunction
        let input = CalculationInput {
            payroll: f64::from(team.size()) * cmd.average_salary,
            team_size: f64::from(team.size()),
            driver_scores: cmd.driver_scores,
            industry: classification.industry.clone(),
            revenue: cmd.revenue,
            four_cs_scores: cmd.four_cs_scores,
        };
        let results = match CalculationService::calculate(&input) {
            Ok(calculation) => AssessmentResults::from_calculation(readiness, calculation),
            Err(err) if self.config.fallback_on_invalid_input => {
                warn!(
                    code = %err.code(),
                    error = %err,
                    "Cost engine rejected input, using readiness-based estimate"
                );
                AssessmentResults::fallback(readiness, team.total_payroll())
            }
            Err(err) => return Err(err.into()),
        };

        // 5. Priority matrix and training recommendation
        // Unrecognised labels are weighted as Professional Services.
        let industry = IndustryRegistry::find(&classification.industry)
            .map_or(Industry::ProfessionalServices, |config| config.industry);
        let matrix = PriorityMatrixCalculator::calculate(&scores, industry);
        let training_type = cmd
            .training_type
            .unwrap_or(self.config.default_training_type);
        let recommendation =
            TrainingRecommender::generate(training_type, results.dysfunction_cost, &matrix);

        // 6. Persist
        let assessment = Assessment::new(
            AssessmentId::new(),
            cmd.company,
            team,
            training_type,
            cmd.driver_scores,
            results,
            IndustryDetection {
                industry: classification.industry,
                confidence: classification.confidence,
            },
            matrix,
            recommendation,
        );
        self.repository.save(&assessment).await?;

        info!(
            assessment_id = %assessment.id(),
            dysfunction_cost = %assessment.results().dysfunction_cost,
            used_fallback = assessment.results().used_fallback,
            "Assessment created"
        );

        Ok(CreateAssessmentResult {
            assessment_id: *assessment.id(),
            redirect_url: assessment.results_path(),
            assessment,
        })
    }

    /// Never fails: errors and timeouts degrade to the default classification.
    async fn classify(&self, website: Option<&str>) -> IndustryClassification {
        let Some(website) = website else {
            return IndustryClassification::default_classification();
        };

        match timeout(self.config.classifier_timeout(), self.classifier.classify(website)).await {
            Ok(Ok(classification)) => classification,
            Ok(Err(err)) => {
                warn!(website, error = %err, "Industry classification failed, using default");
                IndustryClassification::default_classification()
            }
            Err(_) => {
                warn!(
                    website,
                    timeout_secs = self.config.classifier_timeout_secs,
                    "Industry classification timed out, using default"
                );
                IndustryClassification::default_classification()
            }
        }
    }
}
