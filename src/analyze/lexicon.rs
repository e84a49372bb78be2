//! Static sentiment lexicon: category → phrase → weight.
//!
//! Entries are read-only for the life of the process. Each phrase is stemmed
//! once on first use; several phrases may collapse to the same stem (e.g.
//! `decline`/`declined`) and their weights then add up on every match.

use once_cell::sync::Lazy;

use super::normalize::stem_phrase;
use crate::decision::Recommendation;

const BUY_KEYWORDS: &[(&str, u32)] = &[
    ("growth", 2), ("grow", 2), ("growing", 2), ("grew", 2),
    ("rally", 2), ("rallied", 2), ("rallying", 2),
    ("outperform", 3), ("outperformed", 3), ("outperforming", 3),
    ("bullish", 3), ("bull", 2),
    ("upside", 2), ("up", 1), ("upward", 2),
    ("strong performance", 2), ("performed strongly", 2), ("strong", 1),
    ("beat expectations", 3), ("exceeded expectations", 3), ("better than expected", 3),
    ("increase", 1), ("increased", 1), ("increasing", 1),
    ("milestone", 1), ("boom", 2), ("booming", 2),
    ("dominance", 2), ("dominant", 2), ("dominating", 2),
    ("optimistic", 2), ("optimism", 2),
    ("rise", 1), ("rising", 1), ("rose", 1),
    ("valuable", 1), ("value", 1), ("positive outlook", 3),
    ("potential", 1), ("innovation", 1), ("innovative", 1),
    ("leadership", 1), ("leader", 1), ("leading", 1),
    ("success", 1), ("successful", 1), ("succeeded", 1),
    ("opportunity", 1), ("promising", 2), ("exceed", 2), ("expand", 1), ("expanded", 1),
    ("profit", 2), ("profitable", 2), ("gains", 2),
];

const SELL_KEYWORDS: &[(&str, u32)] = &[
    ("decline", 2), ("declined", 2), ("declining", 2),
    ("downgrade", 3), ("downgraded", 3),
    ("underperform", 3), ("underperformed", 3), ("underperforming", 3),
    ("bearish", 3), ("bear", 2),
    ("downside", 2), ("down", 1), ("downward", 2),
    ("weak performance", 2), ("performed weakly", 2), ("weak", 1),
    ("miss expectations", 3), ("missed expectations", 3), ("worse than expected", 3),
    ("decrease", 1), ("decreased", 1), ("decreasing", 1),
    ("drop", 1), ("dropped", 1), ("dropping", 1),
    ("plummet", 3), ("plummeted", 3), ("plummeting", 3),
    ("fall", 1), ("falling", 1), ("fell", 1),
    ("risk", 1), ("risky", 1), ("risks", 1),
    ("concern", 1), ("concerning", 1), ("concerned", 1), ("concerns", 1),
    ("negative outlook", 3), ("negative", 2),
    ("overvalued", 2), ("overpriced", 2), ("expensive", 1),
    ("competition", 1), ("competitive", 1), ("competitor", 1),
    ("pressure", 1), ("pressured", 1), ("under pressure", 2),
    ("challenge", 1), ("challenged", 1), ("challenging", 1),
    ("struggle", 2), ("struggled", 2), ("struggling", 2),
    ("slowdown", 2), ("slowing", 2), ("slowed", 2),
    ("disappointing", 2), ("disappointed", 2), ("disappointment", 2),
    ("loss", 2), ("losing", 2), ("lost", 2), ("losses", 2),
    ("trouble", 2), ("troubled", 2), ("troubling", 2),
];

const HOLD_KEYWORDS: &[(&str, u32)] = &[
    ("stable", 2), ("stability", 2),
    ("maintain", 2), ("maintained", 2), ("maintaining", 2),
    ("mixed signals", 3), ("mixed", 2),
    ("fair value", 2), ("fairly valued", 2),
    ("balanced", 2), ("balance", 2),
    ("wait and see", 3), ("waiting", 1),
    ("uncertain", 2), ("uncertainty", 2),
    ("volatile", 1), ("volatility", 1),
    ("hold", 3), ("holding", 3),
    ("steady", 2), ("steadily", 2),
    ("neutral outlook", 3), ("neutral", 2),
    ("cautious", 1), ("caution", 1),
    ("moderate", 1), ("moderately", 1),
    ("patience", 1), ("patient", 1),
    ("sideways", 2), ("consolidation", 2), ("consolidating", 2),
    ("even", 1), ("unchanged", 1), ("flat", 1),
    ("consistent", 1), ("consistently", 1),
];

/// One weighted phrase with its precomputed stemmed key.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    pub category: Recommendation,
    /// Raw phrase, used for the negation proximity check.
    pub phrase: &'static str,
    /// Stemmed phrase, used for substring counting against stemmed sentences.
    pub stemmed: String,
    pub weight: u32,
}

static LEXICON: Lazy<Vec<LexiconEntry>> = Lazy::new(|| {
    let tables = [
        (Recommendation::Buy, BUY_KEYWORDS),
        (Recommendation::Sell, SELL_KEYWORDS),
        (Recommendation::Hold, HOLD_KEYWORDS),
    ];
    tables
        .into_iter()
        .flat_map(|(category, table)| {
            table.iter().map(move |&(phrase, weight)| LexiconEntry {
                category,
                phrase,
                stemmed: stem_phrase(phrase),
                weight,
            })
        })
        .collect()
});

/// All lexicon entries: BUY first, then SELL, then HOLD.
pub fn entries() -> &'static [LexiconEntry] {
    &LEXICON
}

/// Entries of a single category.
pub fn entries_for(category: Recommendation) -> impl Iterator<Item = &'static LexiconEntry> {
    entries().iter().filter(move |e| e.category == category)
}
