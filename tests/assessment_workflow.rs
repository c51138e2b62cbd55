//! Integration tests for the assessment workflow.
//!
//! Wires the create/get/list handlers to the in-memory repository and the
//! fixed classifier, and checks the end-to-end flow including classifier
//! failures and the readiness-based fallback estimate.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::str::FromStr;

use dysfunction_cost::adapters::{FixedIndustryClassifier, InMemoryAssessmentRepository};
use dysfunction_cost::application::{
    CreateAssessmentCommand, CreateAssessmentHandler, GetAssessmentHandler, GetAssessmentQuery,
    ListAssessmentsHandler, ListAssessmentsQuery,
};
use dysfunction_cost::config::AssessmentConfig;
use dysfunction_cost::domain::analysis::{Quadrant, TrainingType};
use dysfunction_cost::domain::assessment::CompanyInfo;
use dysfunction_cost::domain::dysfunction::{Industry, RawDriverScores};
use dysfunction_cost::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use dysfunction_cost::ports::{AssessmentRepository, IndustryClassification, IndustryClassifier};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Classifier whose backend is always down.
struct UnreachableClassifier;

#[async_trait]
impl IndustryClassifier for UnreachableClassifier {
    async fn classify(&self, website: &str) -> Result<IndustryClassification, DomainError> {
        Err(DomainError::new(ErrorCode::ClassificationFailed, "connection refused")
            .with_detail("website", website))
    }
}

struct Workflow {
    repo: Arc<InMemoryAssessmentRepository>,
    create: CreateAssessmentHandler,
    get: GetAssessmentHandler,
    list: ListAssessmentsHandler,
}

impl Workflow {
    fn new(classifier: Arc<dyn IndustryClassifier>) -> Self {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        Self {
            create: CreateAssessmentHandler::new(
                repo.clone(),
                classifier,
                AssessmentConfig::default(),
            ),
            get: GetAssessmentHandler::new(repo.clone()),
            list: ListAssessmentsHandler::new(repo.clone()),
            repo,
        }
    }
}

fn command(website: Option<&str>, scores: RawDriverScores) -> CreateAssessmentCommand {
    let mut company = CompanyInfo::new("Northwind").with_email("ops@northwind.example");
    if let Some(website) = website {
        company = company.with_website(website);
    }
    CreateAssessmentCommand {
        company,
        team_size: 8,
        average_salary: 125_000.0,
        training_type: Some(TrainingType::HalfDay),
        driver_scores: scores,
        revenue: Some(4_000_000.0),
        four_cs_scores: None,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn create_then_fetch_roundtrip() {
    let classifier = Arc::new(FixedIndustryClassifier::for_industry("Healthcare"));
    let workflow = Workflow::new(classifier.clone());

    let created = workflow
        .create
        .handle(command(Some("northwind.example"), RawDriverScores::uniform(3.0)))
        .await
        .unwrap();

    assert_eq!(classifier.calls().await, vec!["northwind.example"]);
    assert_eq!(created.redirect_url, format!("/results/{}", created.assessment_id));

    let fetched = workflow
        .get
        .handle(GetAssessmentQuery {
            assessment_id: created.assessment_id,
        })
        .await
        .unwrap();

    assert!(fetched.has_email());
    assert!(fetched.has_website());
    assert_eq!(fetched.total_payroll(), Decimal::from(1_000_000));
    assert_eq!(fetched.industry().industry, "Healthcare");
    assert_eq!(fetched.priority_matrix().industry, Industry::Healthcare);

    let results = fetched.results();
    assert!(!results.used_fallback);
    let calculation = results.calculation.as_ref().unwrap();
    assert_eq!(results.dysfunction_cost, calculation.tcd);
    assert_eq!(calculation.multipliers.industry, Decimal::from_str("1.30").unwrap());

    // Half day focuses on the single top-priority driver.
    let recommendation = fetched.recommendation();
    assert_eq!(recommendation.training_type, TrainingType::HalfDay);
    assert_eq!(recommendation.focus_drivers.len(), 1);
    assert_eq!(
        recommendation.estimated_savings,
        results.dysfunction_cost * Decimal::from_str("0.15").unwrap()
    );
}

#[tokio::test]
async fn unreachable_classifier_does_not_block_assessment() {
    let workflow = Workflow::new(Arc::new(UnreachableClassifier));

    let created = workflow
        .create
        .handle(command(Some("northwind.example"), RawDriverScores::uniform(4.0)))
        .await
        .unwrap();

    let detection = created.assessment.industry();
    assert_eq!(detection.industry, "Professional Services");
    assert_eq!(detection.confidence, 0.5);
    assert_eq!(
        created.assessment.priority_matrix().industry,
        Industry::ProfessionalServices
    );
    assert!(!created.assessment.results().used_fallback);
}

#[tokio::test]
async fn invalid_revenue_falls_back_to_readiness_estimate() {
    let workflow = Workflow::new(Arc::new(FixedIndustryClassifier::new()));

    let mut cmd = command(None, RawDriverScores::uniform(7.0));
    cmd.revenue = Some(f64::NAN);
    let created = workflow.create.handle(cmd).await.unwrap();

    let results = created.assessment.results();
    assert!(results.used_fallback);
    assert_eq!(results.readiness_score, Decimal::ONE);
    assert_eq!(results.dysfunction_cost, Decimal::ZERO);
    // Nothing to save, so no payback period.
    assert_eq!(created.assessment.recommendation().payback_months, None);
}

#[tokio::test]
async fn weak_team_has_critical_drivers() {
    let workflow = Workflow::new(Arc::new(FixedIndustryClassifier::for_industry("Technology")));

    let created = workflow
        .create
        .handle(command(Some("acme.io"), RawDriverScores::uniform(2.0)))
        .await
        .unwrap();

    let matrix = created.assessment.priority_matrix();
    assert_eq!(matrix.quadrant_counts.get(Quadrant::Critical), 7);
    assert!(created.assessment.results().dysfunction_cost > Decimal::ZERO);
}

#[tokio::test]
async fn list_reports_total_across_pages() {
    let workflow = Workflow::new(Arc::new(FixedIndustryClassifier::new()));
    for _ in 0..3 {
        workflow
            .create
            .handle(command(None, RawDriverScores::uniform(5.0)))
            .await
            .unwrap();
    }

    let page = workflow
        .list
        .handle(ListAssessmentsQuery::paginated(2, 0))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 3);
    assert!(page.has_more());

    let rest = workflow
        .list
        .handle(ListAssessmentsQuery::paginated(2, 2))
        .await
        .unwrap();
    assert_eq!(rest.items.len(), 1);
    assert!(!rest.has_more());
}

#[tokio::test]
async fn unknown_assessment_is_not_found() {
    let workflow = Workflow::new(Arc::new(FixedIndustryClassifier::new()));

    let err = workflow
        .get
        .handle(GetAssessmentQuery {
            assessment_id: AssessmentId::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::AssessmentNotFound);
}

#[tokio::test]
async fn rejected_command_stores_nothing() {
    let workflow = Workflow::new(Arc::new(FixedIndustryClassifier::new()));

    let mut cmd = command(None, RawDriverScores::uniform(4.0));
    cmd.average_salary = -10.0;
    let err = workflow.create.handle(cmd).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidPayroll);
    let list = workflow
        .list
        .handle(ListAssessmentsQuery::default())
        .await
        .unwrap();
    assert_eq!(list.total, 0);
    assert!(workflow.repo.find_all(10, 0).await.unwrap().is_empty());
}
