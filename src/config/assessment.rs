//! Assessment workflow configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::analysis::TrainingType;

/// Upper limit for the classifier timeout, in seconds.
pub const MAX_CLASSIFIER_TIMEOUT_SECS: u64 = 120;

/// Assessment workflow configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    /// How long to wait for industry classification
    #[serde(default = "default_classifier_timeout")]
    pub classifier_timeout_secs: u64,

    /// Use `payroll × (1 − readiness)` when the engine rejects the input
    #[serde(default = "default_fallback")]
    pub fallback_on_invalid_input: bool,

    /// Training type recommended when the request names none
    #[serde(default = "default_training_type")]
    pub default_training_type: TrainingType,
}

impl AssessmentConfig {
    pub fn classifier_timeout(&self) -> Duration {
        Duration::from_secs(self.classifier_timeout_secs)
    }

    /// Validate assessment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.classifier_timeout_secs == 0
            || self.classifier_timeout_secs > MAX_CLASSIFIER_TIMEOUT_SECS
        {
            return Err(ValidationError::InvalidClassifierTimeout {
                value: self.classifier_timeout_secs,
                max: MAX_CLASSIFIER_TIMEOUT_SECS,
            });
        }
        Ok(())
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            classifier_timeout_secs: default_classifier_timeout(),
            fallback_on_invalid_input: default_fallback(),
            default_training_type: default_training_type(),
        }
    }
}

fn default_classifier_timeout() -> u64 {
    10
}

fn default_fallback() -> bool {
    true
}

fn default_training_type() -> TrainingType {
    TrainingType::FullDay
}
