//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    AssessmentList, CreateAssessmentCommand, CreateAssessmentHandler, CreateAssessmentResult,
    GetAssessmentHandler, GetAssessmentQuery, ListAssessmentsHandler, ListAssessmentsQuery,
    DEFAULT_LIST_LIMIT,
};
