//! GetAssessmentHandler - Query handler for retrieving one assessment.

use std::sync::Arc;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::ports::AssessmentRepository;

/// Query to get an assessment by ID.
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub assessment_id: AssessmentId,
}

/// Handler for retrieving assessments.
pub struct GetAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetAssessmentQuery) -> Result<Assessment, DomainError> {
        self.repository
            .find_by_id(&query.assessment_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::AssessmentNotFound, "Assessment not found")
                    .with_detail("assessmentId", query.assessment_id.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedIndustryClassifier, InMemoryAssessmentRepository};
    use crate::application::handlers::assessment::{
        CreateAssessmentCommand, CreateAssessmentHandler,
    };
    use crate::config::AssessmentConfig;
    use crate::domain::assessment::CompanyInfo;
    use crate::domain::dysfunction::RawDriverScores;

    #[tokio::test]
    async fn returns_stored_assessment() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let create = CreateAssessmentHandler::new(
            repo.clone(),
            Arc::new(FixedIndustryClassifier::new()),
            AssessmentConfig::default(),
        );
        let created = create
            .handle(CreateAssessmentCommand {
                company: CompanyInfo::new("Acme"),
                team_size: 6,
                average_salary: 90_000.0,
                training_type: None,
                driver_scores: RawDriverScores::uniform(5.0),
                revenue: None,
                four_cs_scores: None,
            })
            .await
            .unwrap();

        let handler = GetAssessmentHandler::new(repo);
        let found = handler
            .handle(GetAssessmentQuery {
                assessment_id: created.assessment_id,
            })
            .await
            .unwrap();
        assert_eq!(found, created.assessment);
    }

    #[tokio::test]
    async fn fails_when_not_found() {
        let handler = GetAssessmentHandler::new(Arc::new(InMemoryAssessmentRepository::new()));
        let id = AssessmentId::new();

        let err = handler
            .handle(GetAssessmentQuery { assessment_id: id })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AssessmentNotFound);
        assert_eq!(err.details.get("assessmentId"), Some(&id.to_string()));
    }
}
