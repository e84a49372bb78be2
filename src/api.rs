// src/api.rs
//! HTTP surface over the analyzer.
//!
//! - GET  /health
//! - POST /analyze        {"text": "..."}              → AnalysisResult
//! - POST /batch          [{"id"?: "...", "text": "..."}] → [{"id"?, "result"}]
//! - GET  /debug/*        (only with debug routes enabled)
//! - GET  /metrics        (only with metrics enabled)

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::analyze::{self, AnalysisResult};
use crate::config::ServiceConfig;
use crate::metrics::{self, Metrics};
use crate::telemetry::anon_hash;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Build state from `ServiceConfig::from_env()`.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(ServiceConfig::from_env()?))
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("text is {actual} bytes, limit is {limit}")]
    TextTooLarge { actual: usize, limit: usize },

    #[error("batch has {actual} items, limit is {limit}")]
    BatchTooLarge { actual: usize, limit: usize },

    #[error("batch is empty")]
    EmptyBatch,

    #[error("analysis worker failed: {0}")]
    Worker(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::TextTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::BatchTooLarge { .. } | ApiError::EmptyBatch => StatusCode::BAD_REQUEST,
            ApiError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn reason(&self) -> &'static str {
        match self {
            ApiError::TextTooLarge { .. } => "text_too_large",
            ApiError::BatchTooLarge { .. } => "batch_too_large",
            ApiError::EmptyBatch => "empty_batch",
            ApiError::Worker(_) => "worker",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        metrics::record_rejected(self.reason());
        warn!(reason = self.reason(), error = %self, "request rejected");
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Build the router with the given state. Metrics are mounted only when a
/// handle is passed in.
pub fn router(state: AppState, metrics: Option<&Metrics>) -> Router {
    let mut app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/analyze", post(analyze_one))
        .route("/batch", post(analyze_batch));

    if state.config.debug.routes {
        app = app.merge(analyze::debug::router());
    }
    if let Some(m) = metrics {
        app = app.merge(m.router());
    }

    app.layer(CorsLayer::very_permissive()).with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeReq {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub result: AnalysisResult,
}

pub(crate) fn check_text(text: &str, limit: usize) -> Result<(), ApiError> {
    if text.len() > limit {
        return Err(ApiError::TextTooLarge {
            actual: text.len(),
            limit,
        });
    }
    Ok(())
}

async fn analyze_one(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<AnalysisResult>, ApiError> {
    metrics::record_request("analyze");
    check_text(&body.text, state.config.server.max_text_bytes)?;

    let started = Instant::now();
    let result = analyze::analyze(&body.text);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    metrics::record_outcome(result.recommendation, elapsed_ms);

    info!(
        id = %anon_hash(&body.text),
        recommendation = %result.recommendation,
        elapsed_ms,
        "analyze"
    );
    Ok(Json(result))
}

async fn analyze_batch(
    State(state): State<AppState>,
    Json(items): Json<Vec<BatchItem>>,
) -> Result<Json<Vec<BatchResult>>, ApiError> {
    metrics::record_request("batch");

    let limits = &state.config.server;
    if items.is_empty() {
        return Err(ApiError::EmptyBatch);
    }
    if items.len() > limits.max_batch_items {
        return Err(ApiError::BatchTooLarge {
            actual: items.len(),
            limit: limits.max_batch_items,
        });
    }
    for it in &items {
        check_text(&it.text, limits.max_text_bytes)?;
    }

    // CPU-only work; keep it off the async workers.
    let results = tokio::task::spawn_blocking(move || {
        items
            .into_iter()
            .map(|it| {
                let started = Instant::now();
                let result = analyze::analyze(&it.text);
                metrics::record_outcome(
                    result.recommendation,
                    started.elapsed().as_secs_f64() * 1000.0,
                );
                BatchResult { id: it.id, result }
            })
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| ApiError::Worker(e.to_string()))?;

    info!(items = results.len(), "batch");
    Ok(Json(results))
}
