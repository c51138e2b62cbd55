//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and the error vocabulary shared by the
//! calculation engine, the analysis services and the assessment workflow.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::AssessmentId;
pub use timestamp::Timestamp;
