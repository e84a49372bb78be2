//! Debug endpoints: inspect the lexicon and preview a full analysis breakdown.
//! Mounted by `api::router` only when debug routes are enabled.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::{explain, lexicon, Explanation};
use crate::api::{check_text, ApiError, AppState};
use crate::decision::Recommendation;

#[derive(Debug, Serialize)]
pub struct LexiconOut {
    pub buy: usize,
    pub sell: usize,
    pub hold: usize,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/debug/explain", get(get_explain))
        .route("/debug/lexicon", get(get_lexicon))
}

/// GET /debug/explain?text=...
///
/// Same text limit as `/analyze`.
async fn get_explain(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> Result<Json<Explanation>, ApiError> {
    let text = q.get("text").cloned().unwrap_or_default();
    check_text(&text, state.config.server.max_text_bytes)?;
    Ok(Json(explain(&text)))
}

async fn get_lexicon() -> Json<LexiconOut> {
    let count = |c| lexicon::entries_for(c).count();
    Json(LexiconOut {
        buy: count(Recommendation::Buy),
        sell: count(Recommendation::Sell),
        hold: count(Recommendation::Hold),
    })
}
