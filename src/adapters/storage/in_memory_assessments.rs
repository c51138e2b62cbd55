//! In-Memory Assessment Repository
//!
//! Keeps assessments in insertion order. Useful for the command-line tool,
//! tests and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError};
use crate::ports::AssessmentRepository;

#[derive(Debug, Default)]
struct Store {
    by_id: HashMap<AssessmentId, Assessment>,
    order: Vec<AssessmentId>,
}

/// In-memory storage for assessments
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        let mut store = self.store.write().await;
        store.by_id.clear();
        store.order.clear();
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        let id = *assessment.id();
        if store.by_id.insert(id, assessment.clone()).is_none() {
            store.order.push(id);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
        let store = self.store.read().await;
        Ok(store.by_id.get(id).cloned())
    }

    async fn find_all(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Assessment>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .order
            .iter()
            .skip(offset)
            .take(limit)
            .filter_map(|id| store.by_id.get(id).cloned())
            .collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.store.read().await.order.len())
    }
}
