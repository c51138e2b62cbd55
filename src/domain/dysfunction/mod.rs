//! Dysfunction cost engine.
//!
//! Turns seven 1-7 driver scores, a payroll, a team size, an optional revenue
//! and an industry label into a Total Cost of Dysfunction (TCD) and a
//! readiness score.
//!
//! # Pipeline
//!
//! ```text
//! CalculationInput
//!   -> ValidationService        (reject malformed requests)
//!   -> DomainFactory            (value objects, scores clamped to [1, 7])
//!   -> CostComponentService     (C1..C6, subtotal)
//!   -> overlap discount (x0.88)
//!   -> MultiplierService        (4 C's, team size, gaming)
//!   -> x industry factor, cap at 3.5x payroll
//!   -> CalculationResult        (with confidence interval)
//! ```
//!
//! All monetary arithmetic uses `rust_decimal::Decimal`.

mod anomaly;
mod business_value;
mod calculation;
mod calculator;
mod confidence;
pub mod constants;
mod cost_components;
mod driver;
mod engagement;
mod errors;
mod factory;
mod four_cs;
mod industry;
mod multipliers;
pub(crate) mod numeric;
mod payroll;
mod team_size;
mod validation;

pub use anomaly::AnomalyScore;
pub use business_value::BusinessValueRatio;
pub use calculation::{
    AnomalySummary, AppliedMultipliers, CalculationInput, CalculationMetadata, CalculationResult,
    CostBreakdown, EngagementSummary,
};
pub use calculator::CalculationService;
pub use confidence::ConfidenceInterval;
pub use cost_components::{CostComponentService, CostComponents};
pub use driver::{Driver, DriverScore, DriverScores, RawDriverScores};
pub use engagement::{EngagementCategory, EngagementScore};
pub use errors::{CalculationError, ValidationError, ValidationErrorKind};
pub use factory::DomainFactory;
pub use four_cs::{FourCsDimension, FourCsMultiplier, FourCsScores};
pub use industry::{Industry, IndustryConfig, IndustryRegistry};
pub use multipliers::{MultiplierService, MultiplierSet};
pub use payroll::Payroll;
pub use team_size::TeamSize;
pub use validation::{ValidationReport, ValidationService};
