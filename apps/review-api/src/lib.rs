//! Review API - HTTP surface over the violations engine
//!
//! Request handling lives here so integration tests can drive the router
//! directly; the binary in `main.rs` only binds a listener around it.

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router over the given state.
pub fn app(state: Arc<AppState>) -> Router {
    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Assessment intake and metadata
        .route("/api/assessments", post(handlers::create_assessment))
        .route("/api/assessments/:id", get(handlers::get_assessment))
        // Aggregated violations report
        .route(
            "/api/assessments/:id/violations",
            get(handlers::get_assessment_violations),
        )
        // Stateless reductions for both ingestion shapes
        .route("/api/violations/preview", post(handlers::preview_violations))
        .route("/api/violations/from-rpc", post(handlers::reduce_rpc_rows))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
