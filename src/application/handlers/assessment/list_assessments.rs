//! ListAssessmentsHandler - Query handler for paging through assessments.

use std::sync::Arc;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::DomainError;
use crate::ports::AssessmentRepository;

/// Page size used when the query names none.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Query to list stored assessments.
#[derive(Debug, Clone, Default)]
pub struct ListAssessmentsQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl ListAssessmentsQuery {
    /// Create a paginated query.
    pub fn paginated(limit: usize, offset: usize) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

/// One page of assessments.
#[derive(Debug, Clone)]
pub struct AssessmentList {
    pub items: Vec<Assessment>,
    /// Number of stored assessments, across all pages.
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl AssessmentList {
    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }
}

/// Handler for listing assessments.
pub struct ListAssessmentsHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl ListAssessmentsHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListAssessmentsQuery) -> Result<AssessmentList, DomainError> {
        let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let offset = query.offset.unwrap_or(0);

        let items = self.repository.find_all(limit, offset).await?;
        let total = self.repository.count().await?;

        Ok(AssessmentList {
            items,
            total,
            limit,
            offset,
        })
    }
}
