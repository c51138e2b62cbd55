//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `classifier` - Industry classification (fixed/deterministic)
//! - `storage` - Assessment persistence (in-memory)

pub mod classifier;
pub mod storage;

pub use classifier::FixedIndustryClassifier;
pub use storage::InMemoryAssessmentRepository;
