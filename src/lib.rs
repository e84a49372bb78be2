// src/lib.rs
// Public library surface for the binary, integration tests and reuse.

pub mod analyze;
pub mod api;
pub mod config;
pub mod decision;
pub mod metrics;
pub mod sentiment;
pub mod telemetry;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{analyze, explain, score_text, AnalysisResult, CategoryScore, Explanation};
pub use crate::api::router;
pub use crate::decision::Recommendation;

use tracing::info;

/// Build the full application router: config from env, Prometheus recorder
/// (when enabled) and all routes. Shared by the Shuttle entrypoint and tests.
pub async fn app() -> anyhow::Result<axum::Router> {
    let state = api::AppState::from_env()?;
    let metrics = if state.config.metrics.enabled {
        Some(metrics::Metrics::init()?)
    } else {
        None
    };
    info!(
        debug_routes = state.config.debug.routes,
        metrics = metrics.is_some(),
        max_text_bytes = state.config.server.max_text_bytes,
        "router ready"
    );
    Ok(api::router(state, metrics.as_ref()))
}
