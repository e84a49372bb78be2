//! Whole-text phrase patterns: compound signals that single keywords miss
//! ("record high", "bearish trend", "wait and see"). Each non-overlapping
//! match anywhere in the lowercased text adds a flat weight.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::scoring::CategoryScore;
use crate::decision::Recommendation;

/// Flat contribution of every pattern match.
pub const PATTERN_WEIGHT: f64 = 3.0;

const BUY_PATTERNS: &[&str] = &[
    r"(strong|positive|promising)\s+(outlook|future|prospect)",
    r"(growth|profit|revenue)\s+(increas|improv|expand)",
    r"(hit|reach)\s+(record|all-time|new)\s+(high|level)",
    r"(bull|upward)\s+trend",
    r"(gain|jump|leap)\s+(in|of)\s+(value|price|stock)",
];

const SELL_PATTERNS: &[&str] = &[
    r"(weak|negative|poor)\s+(outlook|future|prospect)",
    r"(decline|drop|decrease)\s+(in|of)\s+(revenue|profit|growth)",
    r"(hit|reach)\s+(record|all-time|new)\s+(low|bottom)",
    r"(bear|downward)\s+trend",
    r"(lose|loss|plunge)\s+(in|of)\s+(value|price|stock)",
];

const HOLD_PATTERNS: &[&str] = &[
    r"(stable|steady|consistent)\s+(outlook|future|prospect)",
    r"(maintain|sustain|preserve)\s+(level|position|status)",
    r"(balanced|fair|reasonable)\s+(value|price|assessment)",
    r"(cautious|careful|prudent)\s+(approach|view|outlook)",
    r"wait\s+and\s+see",
];

#[derive(Debug)]
struct CompiledPattern {
    category: Recommendation,
    source: &'static str,
    re: Regex,
}

static PATTERNS: Lazy<Vec<CompiledPattern>> = Lazy::new(|| {
    [
        (Recommendation::Buy, BUY_PATTERNS),
        (Recommendation::Sell, SELL_PATTERNS),
        (Recommendation::Hold, HOLD_PATTERNS),
    ]
    .into_iter()
    .flat_map(|(category, list)| {
        list.iter().map(move |&source| CompiledPattern {
            category,
            source,
            re: Regex::new(source).expect("phrase pattern regex"),
        })
    })
    .collect()
});

/// A pattern that matched at least once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternHit {
    pub category: Recommendation,
    pub pattern: &'static str,
    pub count: usize,
}

/// All patterns with a non-zero match count over the lowercased `text`.
pub fn pattern_hits(text: &str) -> Vec<PatternHit> {
    let lower = text.to_lowercase();
    PATTERNS
        .iter()
        .filter_map(|p| {
            let count = p.re.find_iter(&lower).count();
            (count > 0).then_some(PatternHit {
                category: p.category,
                pattern: p.source,
                count,
            })
        })
        .collect()
}

/// Fold pattern hits into category accumulators.
pub fn score_hits(hits: &[PatternHit]) -> CategoryScore {
    let mut acc = CategoryScore::default();
    for hit in hits {
        acc.credit(hit.category, hit.count as f64 * PATTERN_WEIGHT);
    }
    acc
}

/// Pattern contribution of the whole text.
pub fn score_patterns(text: &str) -> CategoryScore {
    score_hits(&pattern_hits(text))
}
