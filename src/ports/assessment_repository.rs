//! Assessment repository port.
//!
//! Defines the contract for persisting and reading back assessments.

use async_trait::async_trait;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError};

/// Repository port for assessment persistence.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Save an assessment, replacing any stored one with the same id.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// Find an assessment by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError>;

    /// Page through assessments, oldest first.
    async fn find_all(&self, limit: usize, offset: usize)
        -> Result<Vec<Assessment>, DomainError>;

    /// Total number of stored assessments.
    async fn count(&self) -> Result<usize, DomainError>;
}
