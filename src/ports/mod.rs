//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `IndustryClassifier` - Classifies a company's industry from its website
//! - `AssessmentRepository` - Persists completed assessments

mod assessment_repository;
mod industry_classifier;

pub use assessment_repository::AssessmentRepository;
pub use industry_classifier::{
    IndustryClassification, IndustryClassifier, DEFAULT_CLASSIFICATION_CONFIDENCE,
};
