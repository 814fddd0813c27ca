//! Request/response models for the review API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use violations_engine::{CheckWithAnalysis, RpcViolationRow};

use crate::state::StoredAssessment;

/// Body for creating an assessment from live check rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssessmentRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub checks: Vec<CheckWithAnalysis>,
}

/// Assessment metadata returned on create and fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub id: String,
    pub name: String,
    pub check_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<&StoredAssessment> for AssessmentResponse {
    fn from(assessment: &StoredAssessment) -> Self {
        Self {
            id: assessment.id.clone(),
            name: assessment.name.clone(),
            check_count: assessment.checks.len(),
            created_at: assessment.created_at,
        }
    }
}

/// Body for the stateless Check-shape reduction endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    pub checks: Vec<CheckWithAnalysis>,
}

/// Body for the stateless RPC-shape reduction endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReduceRpcRequest {
    pub rows: Vec<RpcViolationRow>,
}
