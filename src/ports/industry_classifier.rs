//! Industry classifier port.
//!
//! Maps a company website to one of the industry labels the cost engine
//! knows. Real implementations call out to a language model; callers must be
//! prepared for slow or failed classifications and fall back to
//! [`IndustryClassification::default_classification`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::dysfunction::Industry;
use crate::domain::foundation::DomainError;

/// Confidence reported for the default classification.
pub const DEFAULT_CLASSIFICATION_CONFIDENCE: f64 = 0.5;

/// Outcome of classifying a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryClassification {
    /// Industry label, ideally one the registry recognises.
    pub industry: String,
    /// 0.0 to 1.0.
    pub confidence: f64,
    /// Products or services spotted on the website.
    pub offerings: Vec<String>,
    pub reasoning: String,
}

impl IndustryClassification {
    /// Used when no website is given or it could not be analysed.
    pub fn default_classification() -> Self {
        Self {
            industry: Industry::ProfessionalServices.name().to_string(),
            confidence: DEFAULT_CLASSIFICATION_CONFIDENCE,
            offerings: Vec::new(),
            reasoning: "Default classification - website could not be analyzed".to_string(),
        }
    }
}

/// Port for classifying a company's industry from its website.
#[async_trait]
pub trait IndustryClassifier: Send + Sync {
    /// Classify the company behind `website`.
    ///
    /// # Errors
    ///
    /// - `ClassificationFailed` when the website or the model cannot be reached
    async fn classify(&self, website: &str) -> Result<IndustryClassification, DomainError>;
}
