//! Assessment domain module.
//!
//! The record persisted for each completed survey, together with the
//! company, team and industry details it was computed from.

mod aggregate;
mod values;

pub use aggregate::Assessment;
pub use values::{AssessmentResults, CompanyInfo, IndustryDetection, TeamMetrics};
