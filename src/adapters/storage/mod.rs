//! Storage Adapters
//!
//! Implementations of the AssessmentRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryAssessmentRepository** - Stores assessments in memory (CLI/testing/development)

mod in_memory_assessments;

pub use in_memory_assessments::InMemoryAssessmentRepository;
