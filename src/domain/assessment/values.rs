//! Value objects that make up an assessment record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::dysfunction::constants::PAYROLL_MAX;
use crate::domain::dysfunction::numeric::decimal_from_f64;
use crate::domain::dysfunction::CalculationResult;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Who submitted the assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Team or department being assessed.
    #[serde(default)]
    pub team: Option<String>,
}

impl CompanyInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// The website, if one was given and is not blank.
    pub fn website(&self) -> Option<&str> {
        non_blank(self.website.as_deref())
    }

    pub fn email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Headcount and pay of the assessed team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMetrics {
    size: u32,
    average_salary: Decimal,
}

impl TeamMetrics {
    /// # Errors
    ///
    /// - `InvalidTeamSize` if `size` is 0
    /// - `InvalidPayroll` if the salary is not a positive finite number, or
    ///   the team payroll exceeds 1e18
    pub fn new(size: u32, average_salary: f64) -> Result<Self, DomainError> {
        if size < 1 {
            return Err(DomainError::new(
                ErrorCode::InvalidTeamSize,
                "Team size must be at least 1",
            )
            .with_detail("teamSize", size.to_string()));
        }

        let average_salary = decimal_from_f64(average_salary)
            .filter(|salary| *salary > Decimal::ZERO)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InvalidPayroll,
                    "Average salary must be a positive number",
                )
                .with_detail("averageSalary", average_salary.to_string())
            })?;

        let payroll = average_salary
            .checked_mul(Decimal::from(size))
            .filter(|payroll| *payroll <= PAYROLL_MAX);
        if payroll.is_none() {
            return Err(DomainError::new(
                ErrorCode::InvalidPayroll,
                "Team payroll must be at most 1e18",
            )
            .with_detail("teamSize", size.to_string())
            .with_detail("averageSalary", average_salary.to_string()));
        }

        Ok(Self {
            size,
            average_salary,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn average_salary(&self) -> Decimal {
        self.average_salary
    }

    /// `size × average salary`.
    pub fn total_payroll(&self) -> Decimal {
        self.average_salary.saturating_mul(Decimal::from(self.size))
    }
}

/// Industry assigned to the company, and how sure the classifier was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryDetection {
    pub industry: String,
    pub confidence: f64,
}

/// Headline figures of an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResults {
    pub readiness_score: Decimal,
    pub dysfunction_cost: Decimal,
    /// Full engine output; absent when the coarse estimate was used.
    pub calculation: Option<CalculationResult>,
    pub used_fallback: bool,
}

impl AssessmentResults {
    pub fn from_calculation(readiness_score: Decimal, calculation: CalculationResult) -> Self {
        Self {
            readiness_score,
            dysfunction_cost: calculation.tcd,
            calculation: Some(calculation),
            used_fallback: false,
        }
    }

    /// Coarse estimate `payroll × (1 − readiness)`.
    pub fn fallback(readiness_score: Decimal, payroll: Decimal) -> Self {
        Self {
            readiness_score,
            dysfunction_cost: payroll.saturating_mul(Decimal::ONE - readiness_score),
            calculation: None,
            used_fallback: true,
        }
    }
}
