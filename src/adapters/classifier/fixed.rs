//! Fixed Industry Classifier
//!
//! Returns a preconfigured classification for every website. Used when no
//! language-model integration is configured, and in tests where simulated
//! latency and failures exercise the caller's timeout and fallback paths.
//!
//! # Example
//!
//! ```ignore
//! let classifier = FixedIndustryClassifier::returning(classification)
//!     .with_delay(Duration::from_millis(100));
//!
//! let result = classifier.classify("acme.io").await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{IndustryClassification, IndustryClassifier};

/// Number of recent websites kept by the call log.
pub const CALL_LOG_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
enum Outcome {
    Classify(IndustryClassification),
    Fail(String),
}

/// Deterministic classifier.
#[derive(Debug, Clone)]
pub struct FixedIndustryClassifier {
    outcome: Outcome,
    delay: Duration,
    calls: Arc<Mutex<CallLog>>,
}

/// Total call count plus the most recent websites, oldest first.
#[derive(Debug, Default)]
struct CallLog {
    total: usize,
    recent: VecDeque<String>,
}

impl CallLog {
    fn record(&mut self, website: &str) {
        self.total += 1;
        if self.recent.len() == CALL_LOG_CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back(website.to_string());
    }
}

impl FixedIndustryClassifier {
    /// Always answers with the default classification.
    pub fn new() -> Self {
        Self::returning(IndustryClassification::default_classification())
    }

    pub fn returning(classification: IndustryClassification) -> Self {
        Self {
            outcome: Outcome::Classify(classification),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(CallLog::default())),
        }
    }

    /// Classifies every website as `industry` with full confidence.
    pub fn for_industry(industry: impl Into<String>) -> Self {
        let industry = industry.into();
        Self::returning(IndustryClassification {
            reasoning: format!("Configured as {}", industry),
            industry,
            confidence: 1.0,
            offerings: Vec::new(),
        })
    }

    /// Fails every call with `ClassificationFailed`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail(message.into()),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(CallLog::default())),
        }
    }

    /// Waits `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The last `CALL_LOG_CAPACITY` websites classified, in call order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.recent.iter().cloned().collect()
    }

    /// Every call since construction, including ones no longer in the log.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.total
    }
}

impl Default for FixedIndustryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IndustryClassifier for FixedIndustryClassifier {
    async fn classify(&self, website: &str) -> Result<IndustryClassification, DomainError> {
        self.calls.lock().await.record(website);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match &self.outcome {
            Outcome::Classify(classification) => Ok(classification.clone()),
            Outcome::Fail(message) => Err(DomainError::new(
                ErrorCode::ClassificationFailed,
                message.clone(),
            )
            .with_detail("website", website)),
        }
    }
}
