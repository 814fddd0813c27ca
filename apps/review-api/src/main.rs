//! Review API Server - Backend for plan-review violations aggregation
//!
//! Provides REST endpoints for:
//! - Assessment intake (check rows from upstream fetchers)
//! - Aggregated, severity-ranked violations reports
//! - Stateless reductions for both ingestion shapes

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use review_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("review_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    info!("Initializing Review API...");
    let state = Arc::new(AppState::new());
    let app = review_api::app(state);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3002);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting Review API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
