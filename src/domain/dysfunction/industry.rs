//! Industry registry: cost-level factor φ and turnover factor ρ per industry.
//!
//! The set of industries is closed. Lookup by label is exact-match; unknown
//! labels resolve to Manufacturing, the neutral baseline, unless the caller
//! asks for a strict lookup.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A supported industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Healthcare,
    #[serde(rename = "Financial Services")]
    FinancialServices,
    Technology,
    #[serde(rename = "Professional Services")]
    ProfessionalServices,
    Manufacturing,
    Retail,
    Government,
}

impl Industry {
    /// Registry order, highest cost factor first.
    pub const ALL: [Industry; 7] = [
        Industry::Healthcare,
        Industry::FinancialServices,
        Industry::Technology,
        Industry::ProfessionalServices,
        Industry::Manufacturing,
        Industry::Retail,
        Industry::Government,
    ];

    pub const DEFAULT: Industry = Industry::Manufacturing;

    pub fn name(&self) -> &'static str {
        match self {
            Industry::Healthcare => "Healthcare",
            Industry::FinancialServices => "Financial Services",
            Industry::Technology => "Technology",
            Industry::ProfessionalServices => "Professional Services",
            Industry::Manufacturing => "Manufacturing",
            Industry::Retail => "Retail",
            Industry::Government => "Government",
        }
    }

    /// Exact-match lookup by display name.
    pub fn from_name(name: &str) -> Option<Industry> {
        Industry::ALL.into_iter().find(|i| i.name() == name)
    }

    pub fn config(&self) -> IndustryConfig {
        let (phi, rho) = match self {
            Industry::Healthcare => (130, 125),
            Industry::FinancialServices => (125, 120),
            Industry::Technology => (120, 115),
            Industry::ProfessionalServices => (115, 110),
            Industry::Manufacturing => (100, 100),
            Industry::Retail => (90, 95),
            Industry::Government => (85, 90),
        };
        IndustryConfig {
            industry: *self,
            phi: Decimal::new(phi, 2),
            rho: Decimal::new(rho, 2),
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Calculation factors for one industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryConfig {
    pub industry: Industry,
    /// φ, overall cost level relative to Manufacturing.
    pub phi: Decimal,
    /// ρ, turnover cost multiplier used by C3.
    pub rho: Decimal,
}

impl IndustryConfig {
    pub fn name(&self) -> &'static str {
        self.industry.name()
    }
}

/// Stateless lookup over the closed industry table.
pub struct IndustryRegistry;

impl IndustryRegistry {
    /// Resolves a label, falling back to the default industry when unknown.
    pub fn get_industry_config(name: &str) -> IndustryConfig {
        match Industry::from_name(name) {
            Some(industry) => industry.config(),
            None => {
                tracing::info!(
                    industry = name,
                    fallback = Industry::DEFAULT.name(),
                    "Unknown industry, using default"
                );
                Self::default_industry()
            }
        }
    }

    /// Resolves a label or fails with `INDUSTRY_NOT_FOUND`.
    pub fn require(name: &str) -> Result<IndustryConfig, ValidationError> {
        Industry::from_name(name)
            .map(|industry| industry.config())
            .ok_or_else(|| ValidationError::industry_not_found(name))
    }

    pub fn find(name: &str) -> Option<IndustryConfig> {
        Industry::from_name(name).map(|industry| industry.config())
    }

    pub fn has_industry(name: &str) -> bool {
        Industry::from_name(name).is_some()
    }

    pub fn all_industries() -> Vec<IndustryConfig> {
        Industry::ALL.iter().map(Industry::config).collect()
    }

    pub fn industry_names() -> Vec<&'static str> {
        Industry::ALL.iter().map(Industry::name).collect()
    }

    pub fn default_industry() -> IndustryConfig {
        Industry::DEFAULT.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn documented_factors() {
        let expected = [
            ("Healthcare", "1.30", "1.25"),
            ("Financial Services", "1.25", "1.20"),
            ("Technology", "1.20", "1.15"),
            ("Professional Services", "1.15", "1.10"),
            ("Manufacturing", "1.00", "1.00"),
            ("Retail", "0.90", "0.95"),
            ("Government", "0.85", "0.90"),
        ];
        for (name, phi, rho) in expected {
            let config = IndustryRegistry::get_industry_config(name);
            assert_eq!(config.name(), name);
            assert_eq!(config.phi, dec(phi));
            assert_eq!(config.rho, dec(rho));
        }
    }

    #[test]
    fn unknown_industry_falls_back_to_manufacturing() {
        let config = IndustryRegistry::get_industry_config("Aerospace");
        assert_eq!(config.industry, Industry::Manufacturing);
        assert_eq!(config.phi, Decimal::ONE);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(!IndustryRegistry::has_industry("technology"));
        assert!(IndustryRegistry::has_industry("Technology"));
    }

    #[test]
    fn strict_lookup_reports_missing_industry() {
        let err = IndustryRegistry::require("Aerospace").unwrap_err();
        assert_eq!(err.code(), ErrorCode::IndustryNotFound);
        assert!(IndustryRegistry::require("Retail").is_ok());
        assert!(IndustryRegistry::find("Retail").is_some());
    }

    #[test]
    fn registry_lists_seven_industries() {
        assert_eq!(IndustryRegistry::all_industries().len(), 7);
        assert_eq!(IndustryRegistry::industry_names()[0], "Healthcare");
        assert_eq!(IndustryRegistry::default_industry().name(), "Manufacturing");
    }

    #[test]
    fn serializes_with_display_name() {
        let json = serde_json::to_string(&Industry::FinancialServices).unwrap();
        assert_eq!(json, "\"Financial Services\"");
    }
}
