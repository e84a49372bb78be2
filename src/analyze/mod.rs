// src/analyze/mod.rs
//! Analysis pipeline entry: raw news text → buy/hold/sell split, a discrete
//! recommendation and an extractive justification.
//!
//! Order:
//! 1) sentence split + stemming (normalize)
//! 2) lexicon scoring per sentence, negation-aware (crate::sentiment)
//! 3) whole-text phrase patterns (patterns)
//! 4) percentages with clamp + rescale (scoring)
//! 5) recommendation argmax (crate::decision)
//! 6) reasoning sentences, ranked independently (reasoning)
//!
//! Everything here is pure and synchronous; identical input gives identical
//! output.

pub mod debug;
pub mod lexicon;
pub mod normalize;
pub mod patterns;
pub mod reasoning;
pub mod scoring;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decision::Recommendation;
use crate::sentiment::{score_sentence, SentenceScore};
use crate::telemetry::anon_hash;

pub use crate::analyze::patterns::PatternHit;
pub use crate::analyze::reasoning::{RankedSentence, FALLBACK_REASONING};
pub use crate::analyze::scoring::{percentages, CategoryScore, SentimentSplit};

/// Record handed back to callers (and serialized by the API as-is).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub buy_percent: f64,
    pub hold_percent: f64,
    pub sell_percent: f64,
    pub recommendation: Recommendation,
    pub reasoning: String,
}

/// Full breakdown of one analysis: the result plus every intermediate score.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub result: AnalysisResult,
    pub sentence_scores: CategoryScore,
    pub pattern_scores: CategoryScore,
    pub sentences: Vec<SentenceTrace>,
    pub pattern_hits: Vec<PatternHit>,
    pub reasoning_candidates: Vec<RankedSentence>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentenceTrace {
    pub text: String,
    #[serde(flatten)]
    pub scored: SentenceScore,
}

/// Analyze one piece of news text.
///
/// Same result as `explain(news_content).result`, without keeping the
/// per-sentence trace.
pub fn analyze(news_content: &str) -> AnalysisResult {
    let split = percentages(&score_text(news_content));
    let recommendation = Recommendation::select(&split);
    let reasoning = reasoning::extract_reasoning(news_content, recommendation);
    log_outcome(news_content, &split, recommendation);
    result_from(&split, recommendation, reasoning)
}

/// Combined raw accumulators (sentence scorer + pattern scorer).
pub fn score_text(news_content: &str) -> CategoryScore {
    let sentences = normalize::split_sentences(news_content);
    crate::sentiment::score_sentences(&sentences) + patterns::score_patterns(news_content)
}

/// Run the pipeline and keep the intermediate results.
pub fn explain(news_content: &str) -> Explanation {
    let sentences: Vec<SentenceTrace> = normalize::split_sentences(news_content)
        .iter()
        .map(|s| SentenceTrace {
            text: s.text.to_string(),
            scored: score_sentence(s),
        })
        .collect();
    let sentence_scores: CategoryScore = sentences.iter().map(|t| t.scored.score).sum();

    let pattern_hits = patterns::pattern_hits(news_content);
    let pattern_scores = patterns::score_hits(&pattern_hits);

    let split = percentages(&(sentence_scores + pattern_scores));
    let recommendation = Recommendation::select(&split);

    let reasoning_candidates = reasoning::rank_sentences(news_content, recommendation);
    let reasoning = reasoning::compose(&reasoning_candidates);

    log_outcome(news_content, &split, recommendation);

    Explanation {
        result: result_from(&split, recommendation, reasoning),
        sentence_scores,
        pattern_scores,
        sentences,
        pattern_hits,
        reasoning_candidates,
    }
}

fn result_from(
    split: &SentimentSplit,
    recommendation: Recommendation,
    reasoning: String,
) -> AnalysisResult {
    AnalysisResult {
        buy_percent: split.buy,
        hold_percent: split.hold,
        sell_percent: split.sell,
        recommendation,
        reasoning,
    }
}

fn log_outcome(news_content: &str, split: &SentimentSplit, recommendation: Recommendation) {
    debug!(
        target: "analyze",
        id = %anon_hash(news_content),
        buy = split.buy,
        hold = split.hold,
        sell = split.sell,
        %recommendation,
        "analysis complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_matches_explain() {
        for text in [
            "Shares rallied after the company beat expectations. Risks remain.",
            "",
            "The stock declined sharply.",
            "No comment was given by the board about it but revenue did not show growth.",
            "The outlook remains stable and steady overall. Investors wait and see.",
        ] {
            assert_eq!(analyze(text), explain(text).result, "{text:?}");
        }
    }

    #[test]
    fn score_text_equals_explained_parts() {
        let text = "Revenue did not decline. The outlook is a wait and see.";
        let e = explain(text);
        assert_eq!(score_text(text), e.sentence_scores + e.pattern_scores);
        assert_eq!(e.pattern_scores.hold, 3.0);
    }

    #[test]
    fn explanation_serializes_flat_sentence_traces() {
        let e = explain("The stock declined sharply.");
        let v = serde_json::to_value(&e).unwrap();
        let first = &v["sentences"][0];
        assert_eq!(first["text"], "The stock declined sharply");
        assert_eq!(first["index"], 0);
        assert_eq!(first["score"]["sell"], 4.0);
        assert_eq!(v["result"]["recommendation"], "SELL");
    }
}
