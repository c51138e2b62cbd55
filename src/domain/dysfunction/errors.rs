//! Error types for the dysfunction cost engine.
//!
//! Validation failures carry a machine-readable code, a human message, the
//! moment they were raised and a JSON context holding the offending value,
//! so they can be logged as structured fields or returned to a form.
//!
//! Clamping is not an error path: out-of-range driver scores, business value
//! ratios and 4 C's scores are corrected silently. Only malformed requests
//! (bad payroll, bad team size, missing or non-finite scores, empty industry)
//! produce a `ValidationError`.

use serde_json::{json, Value};
use thiserror::Error;

use super::{Driver, FourCsDimension};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};

/// The specific rule a request violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationErrorKind {
    #[error("Team size must be {requirement}, got: {value}")]
    InvalidTeamSize { value: f64, requirement: &'static str },

    #[error("Payroll must be {requirement}, got: {value}")]
    InvalidPayroll { value: f64, requirement: &'static str },

    #[error("Driver score for \"{}\" must be a finite number, got: {value}", .driver.key())]
    InvalidDriverScore { driver: Driver, value: f64 },

    #[error("Missing driver score: {}", .driver.key())]
    MissingDriverScore { driver: Driver },

    #[error("Revenue must be {requirement}, got: {value}")]
    InvalidRevenue { value: f64, requirement: &'static str },

    #[error("Industry must be a non-empty string")]
    InvalidIndustry { value: String },

    #[error("4 C's score for \"{}\" must be a finite number, got: {value}", .dimension.key())]
    InvalidFourCsScore { dimension: FourCsDimension, value: f64 },

    #[error("Industry \"{industry}\" not found in configuration")]
    IndustryNotFound { industry: String },
}

impl ValidationErrorKind {
    /// Machine-readable code for this rule.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationErrorKind::InvalidTeamSize { .. } => ErrorCode::InvalidTeamSize,
            ValidationErrorKind::InvalidPayroll { .. } => ErrorCode::InvalidPayroll,
            ValidationErrorKind::InvalidDriverScore { .. } => ErrorCode::InvalidDriverScore,
            ValidationErrorKind::MissingDriverScore { .. } => ErrorCode::MissingDriverScore,
            ValidationErrorKind::InvalidRevenue { .. } => ErrorCode::InvalidRevenue,
            ValidationErrorKind::InvalidIndustry { .. } => ErrorCode::InvalidIndustry,
            ValidationErrorKind::InvalidFourCsScore { .. } => ErrorCode::InvalidFourCsScore,
            ValidationErrorKind::IndustryNotFound { .. } => ErrorCode::IndustryNotFound,
        }
    }

    /// The offending value, keyed the way structured logs expect.
    pub fn context(&self) -> Value {
        match self {
            ValidationErrorKind::InvalidTeamSize { value, .. } => json!({ "teamSize": value }),
            ValidationErrorKind::InvalidPayroll { value, .. } => json!({ "payroll": value }),
            ValidationErrorKind::InvalidDriverScore { driver, value } => {
                json!({ "driverName": driver.key(), "score": value })
            }
            ValidationErrorKind::MissingDriverScore { driver } => {
                json!({ "driverName": driver.key() })
            }
            ValidationErrorKind::InvalidRevenue { value, .. } => json!({ "revenue": value }),
            ValidationErrorKind::InvalidIndustry { value } => json!({ "industry": value }),
            ValidationErrorKind::InvalidFourCsScore { dimension, value } => {
                json!({ "dimension": dimension.key(), "score": value })
            }
            ValidationErrorKind::IndustryNotFound { industry } => json!({ "industry": industry }),
        }
    }
}

/// A rejected calculation input.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct ValidationError {
    kind: ValidationErrorKind,
    timestamp: Timestamp,
}

impl ValidationError {
    /// Wraps a violated rule, stamping the current time.
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self {
            kind,
            timestamp: Timestamp::now(),
        }
    }

    pub fn invalid_team_size(value: f64, requirement: &'static str) -> Self {
        Self::new(ValidationErrorKind::InvalidTeamSize { value, requirement })
    }

    pub fn invalid_payroll(value: f64, requirement: &'static str) -> Self {
        Self::new(ValidationErrorKind::InvalidPayroll { value, requirement })
    }

    pub fn invalid_driver_score(driver: Driver, value: f64) -> Self {
        Self::new(ValidationErrorKind::InvalidDriverScore { driver, value })
    }

    pub fn missing_driver_score(driver: Driver) -> Self {
        Self::new(ValidationErrorKind::MissingDriverScore { driver })
    }

    pub fn invalid_revenue(value: f64, requirement: &'static str) -> Self {
        Self::new(ValidationErrorKind::InvalidRevenue { value, requirement })
    }

    pub fn invalid_industry(value: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::InvalidIndustry {
            value: value.into(),
        })
    }

    pub fn invalid_four_cs_score(dimension: FourCsDimension, value: f64) -> Self {
        Self::new(ValidationErrorKind::InvalidFourCsScore { dimension, value })
    }

    pub fn industry_not_found(industry: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::IndustryNotFound {
            industry: industry.into(),
        })
    }

    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn context(&self) -> Value {
        self.kind.context()
    }

    /// Structured rendering for logs and API responses.
    pub fn to_json(&self) -> Value {
        json!({
            "name": "ValidationError",
            "code": self.code().as_str(),
            "message": self.message(),
            "timestamp": self.timestamp.to_rfc3339(),
            "context": self.context(),
        })
    }
}

/// Failure of a full calculation run.
#[derive(Debug, Clone, Error)]
pub enum CalculationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Arithmetic overflow while computing {stage}")]
    Overflow { stage: &'static str },
}

impl CalculationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CalculationError::Validation(err) => err.code(),
            CalculationError::Overflow { .. } => ErrorCode::CalculationError,
        }
    }

    /// Returns the validation failure, if that is what stopped the run.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            CalculationError::Validation(err) => Some(err),
            CalculationError::Overflow { .. } => None,
        }
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let mut domain = DomainError::new(err.code(), err.message())
            .with_detail("timestamp", err.timestamp().to_rfc3339());
        if let Value::Object(fields) = err.context() {
            for (key, value) in fields {
                let rendered = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                domain = domain.with_detail(key, rendered);
            }
        }
        domain
    }
}

impl From<CalculationError> for DomainError {
    fn from(err: CalculationError) -> Self {
        match err {
            CalculationError::Validation(inner) => inner.into(),
            CalculationError::Overflow { stage } => DomainError::new(
                ErrorCode::CalculationError,
                format!("Arithmetic overflow while computing {}", stage),
            )
            .with_detail("stage", stage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_team_size_message_and_code() {
        let err = ValidationError::invalid_team_size(0.0, "at least 1");
        assert_eq!(err.message(), "Team size must be at least 1, got: 0");
        assert_eq!(err.code(), ErrorCode::InvalidTeamSize);
        assert_eq!(err.context(), json!({ "teamSize": 0.0 }));
    }

    #[test]
    fn missing_driver_score_uses_driver_key() {
        let err = ValidationError::missing_driver_score(Driver::PsychologicalSafety);
        assert_eq!(format!("{}", err), "Missing driver score: psych_safety");
        assert_eq!(err.code(), ErrorCode::MissingDriverScore);
        assert_eq!(err.context(), json!({ "driverName": "psych_safety" }));
    }

    #[test]
    fn non_finite_context_values_render_as_null() {
        let err = ValidationError::invalid_payroll(f64::NAN, "a finite number");
        assert_eq!(err.context(), json!({ "payroll": null }));
    }

    #[test]
    fn to_json_carries_all_fields() {
        let err = ValidationError::industry_not_found("Aerospace");
        let json = err.to_json();

        assert_eq!(json["name"], "ValidationError");
        assert_eq!(json["code"], "INDUSTRY_NOT_FOUND");
        assert_eq!(json["message"], "Industry \"Aerospace\" not found in configuration");
        assert_eq!(json["context"]["industry"], "Aerospace");
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn calculation_error_delegates_code() {
        let err: CalculationError = ValidationError::invalid_industry("").into();
        assert_eq!(err.code(), ErrorCode::InvalidIndustry);
        assert!(err.as_validation().is_some());

        let overflow = CalculationError::Overflow { stage: "raw TCD" };
        assert_eq!(overflow.code(), ErrorCode::CalculationError);
        assert!(overflow.as_validation().is_none());
    }

    #[test]
    fn converts_into_domain_error_with_context_details() {
        let err = ValidationError::invalid_driver_score(Driver::Trust, f64::INFINITY);
        let domain: DomainError = err.into();

        assert_eq!(domain.code, ErrorCode::InvalidDriverScore);
        assert_eq!(domain.details.get("driverName"), Some(&"trust".to_string()));
        assert_eq!(domain.details.get("score"), Some(&"null".to_string()));
        assert!(domain.details.contains_key("timestamp"));
    }
}
