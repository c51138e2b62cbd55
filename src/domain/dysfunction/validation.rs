//! Request validation, fail-fast or collect-all.

use super::{CalculationInput, Driver, FourCsDimension, Payroll, TeamSize, ValidationError};

/// Outcome of `validate_all`.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ValidationError::message).collect()
    }
}

/// Checks a `CalculationInput` before any value object is built.
///
/// Out-of-range driver and 4 C's scores pass; they are clamped later.
pub struct ValidationService;

impl ValidationService {
    /// Returns the first violated rule.
    pub fn validate(input: &CalculationInput) -> Result<(), ValidationError> {
        match Self::violations(input).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Reports every violated rule without failing.
    pub fn validate_all(input: &CalculationInput) -> ValidationReport {
        ValidationReport::from_errors(Self::violations(input))
    }

    fn violations(input: &CalculationInput) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Err(err) = Payroll::new(input.payroll) {
            errors.push(err);
        }
        if let Err(err) = TeamSize::new(input.team_size) {
            errors.push(err);
        }

        for driver in Driver::ALL {
            match input.driver_scores.get(driver) {
                None => errors.push(ValidationError::missing_driver_score(driver)),
                Some(value) if !value.is_finite() => {
                    errors.push(ValidationError::invalid_driver_score(driver, value))
                }
                Some(_) => {}
            }
        }

        if let Some(revenue) = input.revenue {
            if !revenue.is_finite() {
                errors.push(ValidationError::invalid_revenue(revenue, "a finite number"));
            } else if revenue < 0.0 {
                errors.push(ValidationError::invalid_revenue(revenue, "at least 0"));
            }
        }

        if input.industry.trim().is_empty() {
            errors.push(ValidationError::invalid_industry(input.industry.clone()));
        }

        if let Some(scores) = &input.four_cs_scores {
            for dimension in FourCsDimension::ALL {
                let value = scores.get(dimension);
                if !value.is_finite() {
                    errors.push(ValidationError::invalid_four_cs_score(dimension, value));
                }
            }
        }

        errors
    }
}
