//! Application state for the review API

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;
use violations_engine::CheckWithAnalysis;

/// One stored assessment: the raw check rows awaiting reduction.
#[derive(Debug, Clone)]
pub struct StoredAssessment {
    pub id: String,
    pub name: String,
    pub checks: Vec<CheckWithAnalysis>,
    pub created_at: DateTime<Utc>,
}

/// In-memory assessment store. Context-scoped: owned by the router state
/// and passed by reference into handlers, never a process-wide singleton.
#[derive(Default)]
pub struct AppState {
    assessments: RwLock<HashMap<String, StoredAssessment>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a batch of check rows under a fresh assessment id.
    pub fn insert_assessment(
        &self,
        name: String,
        checks: Vec<CheckWithAnalysis>,
    ) -> StoredAssessment {
        let assessment = StoredAssessment {
            id: Uuid::new_v4().to_string(),
            name,
            checks,
            created_at: Utc::now(),
        };

        let mut assessments = self
            .assessments
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        assessments.insert(assessment.id.clone(), assessment.clone());
        assessment
    }

    /// Clone an assessment out so the reduction runs outside the lock.
    pub fn get_assessment(&self, id: &str) -> Option<StoredAssessment> {
        let assessments = self
            .assessments
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        assessments.get(id).cloned()
    }
}
