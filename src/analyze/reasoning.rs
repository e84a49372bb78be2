//! Reasoning extractor: picks the most explanatory original sentences for a
//! given recommendation.
//!
//! Works on the raw text independently of the sentiment scores, with its own
//! recommendation-specific keyword lists. Sentences that talk about analysts
//! or recommendations are skipped so the justification does not just echo
//! someone else's call.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::normalize::{split_sentences, Sentence};
use crate::decision::Recommendation;

/// Returned when no sentence survives filtering.
pub const FALLBACK_REASONING: &str =
    "Based on the overall sentiment analysis of available information.";

/// How many sentences make it into the justification.
pub const MAX_REASONING_SENTENCES: usize = 3;

const BUY_REASON_KEYWORDS: &[&str] = &[
    "growth", "rally", "increase", "positive", "rise", "milestone", "outperform", "bullish",
    "dominance", "valuable", "optimistic", "boom", "profit", "strong", "beat", "exceed", "gain",
    "upside", "trillion", "high", "record", "success", "innovation", "leader",
];

const SELL_REASON_KEYWORDS: &[&str] = &[
    "decline", "drop", "decrease", "negative", "fall", "concern", "underperform", "bearish",
    "risk", "weak", "downgrade", "loss", "trouble", "plummet", "challenge", "struggle",
    "pressure", "disappointing", "slowdown", "overvalued", "expensive", "low",
];

const HOLD_REASON_KEYWORDS: &[&str] = &[
    "stable", "maintain", "neutral", "balanced", "mixed", "uncertain", "volatile", "steady",
    "wait", "cautious", "fair", "moderate", "patience", "consolidation", "unchanged", "flat",
];

const FACT_INDICATORS: &[&str] = &[
    "achieved", "reported", "announced", "launched", "grew by", "increased by", "decreased by",
    "fell by", "percent", "%", "billion", "million", "trillion", "market cap",
];

/// Sentences mentioning any of these are never used as reasoning.
const EXCLUDED_TERMS: &[&str] = &["analyst", "recommendation", "recommend"];

const KEYWORD_POINTS: u32 = 2;
const FACT_POINTS: u32 = 3;
const NUMBER_POINTS: u32 = 2;
const COMPANY_POINTS: u32 = 3;

/// Sentences need more than this many words to qualify.
const MIN_WORDS_EXCLUSIVE: usize = 3;

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("digit regex"));
static COMPANY_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"company|stock|shares|market|corporation|inc\.?|ltd\.?").expect("company regex")
});

fn keywords_for(recommendation: Recommendation) -> &'static [&'static str] {
    match recommendation {
        Recommendation::Buy => BUY_REASON_KEYWORDS,
        Recommendation::Sell => SELL_REASON_KEYWORDS,
        Recommendation::Hold => HOLD_REASON_KEYWORDS,
    }
}

/// A sentence that passed filtering, with its explanatory score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedSentence {
    pub index: usize,
    pub text: String,
    pub score: u32,
}

/// Filter, score and sort candidate sentences: score descending, then
/// original position ascending.
pub fn rank_sentences(text: &str, recommendation: Recommendation) -> Vec<RankedSentence> {
    let keywords = keywords_for(recommendation);
    let mut ranked: Vec<RankedSentence> = split_sentences(text)
        .iter()
        .filter_map(|s| score_candidate(s, keywords))
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
    ranked
}

/// Join the top sentences into the justification string.
pub fn extract_reasoning(text: &str, recommendation: Recommendation) -> String {
    compose(&rank_sentences(text, recommendation))
}

/// Build the justification from an already ranked list.
pub fn compose(ranked: &[RankedSentence]) -> String {
    if ranked.is_empty() {
        return FALLBACK_REASONING.to_string();
    }
    ranked
        .iter()
        .take(MAX_REASONING_SENTENCES)
        .map(|r| r.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn score_candidate(sentence: &Sentence<'_>, keywords: &[&str]) -> Option<RankedSentence> {
    let trimmed = sentence.text.trim();
    if trimmed.starts_with('.') || trimmed.split_whitespace().count() <= MIN_WORDS_EXCLUSIVE {
        return None;
    }

    let lower = sentence.lower();
    if EXCLUDED_TERMS.iter().any(|t| lower.contains(t)) {
        return None;
    }

    let present = |list: &[&str]| list.iter().filter(|k| lower.contains(*k)).count() as u32;

    let mut score = present(keywords) * KEYWORD_POINTS + present(FACT_INDICATORS) * FACT_POINTS;
    if DIGIT.is_match(trimmed) {
        score += NUMBER_POINTS;
    }
    if COMPANY_REF.is_match(&lower) {
        score += COMPANY_POINTS;
    }

    Some(RankedSentence {
        index: sentence.index,
        text: trimmed.to_string(),
        score,
    })
}
