//! Error codes and the general-purpose domain error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Machine-readable error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors
    ValidationError,
    InvalidTeamSize,
    InvalidPayroll,
    InvalidDriverScore,
    MissingDriverScore,
    InvalidRevenue,
    InvalidIndustry,
    InvalidFourCsScore,
    IndustryNotFound,

    // Calculation errors
    CalculationError,

    // Not found errors
    AssessmentNotFound,

    // External collaborator errors
    ClassificationFailed,
    StorageError,
    InternalError,
}

impl ErrorCode {
    /// Returns the wire representation, e.g. `INVALID_TEAM_SIZE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidTeamSize => "INVALID_TEAM_SIZE",
            ErrorCode::InvalidPayroll => "INVALID_PAYROLL",
            ErrorCode::InvalidDriverScore => "INVALID_DRIVER_SCORE",
            ErrorCode::MissingDriverScore => "MISSING_DRIVER_SCORE",
            ErrorCode::InvalidRevenue => "INVALID_REVENUE",
            ErrorCode::InvalidIndustry => "INVALID_INDUSTRY",
            ErrorCode::InvalidFourCsScore => "INVALID_FOUR_CS_SCORE",
            ErrorCode::IndustryNotFound => "INDUSTRY_NOT_FOUND",
            ErrorCode::CalculationError => "CALCULATION_ERROR",
            ErrorCode::AssessmentNotFound => "ASSESSMENT_NOT_FOUND",
            ErrorCode::ClassificationFailed => "CLASSIFICATION_FAILED",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// True for every code produced by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorCode::ValidationError
                | ErrorCode::InvalidTeamSize
                | ErrorCode::InvalidPayroll
                | ErrorCode::InvalidDriverScore
                | ErrorCode::MissingDriverScore
                | ErrorCode::InvalidRevenue
                | ErrorCode::InvalidIndustry
                | ErrorCode::InvalidFourCsScore
                | ErrorCode::IndustryNotFound
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Standard domain error with code, message, and optional details.
///
/// Used at the port and application boundaries, where errors from the
/// calculation engine and from external collaborators meet.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message).with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::AssessmentNotFound, "Assessment not found");
        assert_eq!(format!("{}", err), "[ASSESSMENT_NOT_FOUND] Assessment not found");
    }

    #[test]
    fn domain_error_validation_records_field() {
        let err = DomainError::validation("avg_salary", "Invalid average salary");
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.details.get("field"), Some(&"avg_salary".to_string()));
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::StorageError, "Save failed")
            .with_detail("assessment_id", "abc")
            .with_detail("reason", "disk full");

        assert_eq!(err.details.len(), 2);
        assert_eq!(err.details.get("reason"), Some(&"disk full".to_string()));
    }

    #[test]
    fn error_code_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::InvalidFourCsScore).unwrap();
        assert_eq!(json, "\"INVALID_FOUR_CS_SCORE\"");
        assert_eq!(ErrorCode::InvalidFourCsScore.as_str(), "INVALID_FOUR_CS_SCORE");
    }

    #[test]
    fn error_code_is_validation_partitions_codes() {
        assert!(ErrorCode::InvalidPayroll.is_validation());
        assert!(ErrorCode::IndustryNotFound.is_validation());
        assert!(!ErrorCode::CalculationError.is_validation());
        assert!(!ErrorCode::StorageError.is_validation());
    }
}
