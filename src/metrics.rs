//! Prometheus exposition and the analyzer's counters/histograms.

use axum::{routing::get, Router};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::decision::Recommendation;

/// The global recorder can only be installed once per process.
static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

#[derive(Clone)]
pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder (first call) and return a handle to it.
    pub fn init() -> anyhow::Result<Self> {
        let handle = HANDLE.get_or_try_init(|| {
            PrometheusBuilder::new().install_recorder()
        })?;
        Ok(Self {
            handle: handle.clone(),
        })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router<S>(&self) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

pub fn record_request(route: &'static str) {
    counter!("analyze_requests_total", "route" => route).increment(1);
}

pub fn record_outcome(recommendation: Recommendation, elapsed_ms: f64) {
    counter!("analyze_recommendation_total", "recommendation" => recommendation.as_str())
        .increment(1);
    histogram!("analyze_duration_ms").record(elapsed_ms);
}

pub fn record_rejected(reason: &'static str) {
    counter!("analyze_rejected_total", "reason" => reason).increment(1);
}
