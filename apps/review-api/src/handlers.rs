//! HTTP handlers for the review API

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use shared_types::{Violation, ViolationsReport};
use violations_engine::ViolationsEngine;

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Store a batch of check rows as a new assessment
pub async fn create_assessment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAssessmentRequest>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let name = req
        .name
        .unwrap_or_else(|| "Untitled assessment".to_string());
    let stored = state.insert_assessment(name, req.checks);

    tracing::info!(
        "Created assessment: {} ({} checks)",
        stored.id,
        stored.checks.len()
    );

    Ok(Json(AssessmentResponse::from(&stored)))
}

/// Get assessment metadata by id
pub async fn get_assessment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let stored = state
        .get_assessment(&id)
        .ok_or_else(|| ApiError::AssessmentNotFound(id.clone()))?;

    Ok(Json(AssessmentResponse::from(&stored)))
}

/// Reduce a stored assessment's checks into its violations report
pub async fn get_assessment_violations(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ViolationsReport>, ApiError> {
    let stored = state
        .get_assessment(&id)
        .ok_or_else(|| ApiError::AssessmentNotFound(id.clone()))?;

    let engine = ViolationsEngine::new();
    let report = engine.report_for_checks(&stored.id, &stored.checks);

    tracing::info!(
        "Reduced assessment {}: {} violations from {} checks",
        stored.id,
        report.violations.len(),
        stored.checks.len()
    );

    Ok(Json(report))
}

/// Stateless reduction of live check rows
pub async fn preview_violations(Json(req): Json<PreviewRequest>) -> Json<Vec<Violation>> {
    Json(ViolationsEngine::new().reduce_checks(&req.checks))
}

/// Stateless reduction of pre-filtered stored-procedure rows
pub async fn reduce_rpc_rows(Json(req): Json<ReduceRpcRequest>) -> Json<Vec<Violation>> {
    Json(ViolationsEngine::new().reduce_rpc_rows(&req.rows))
}
