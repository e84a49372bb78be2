//! Sentence scorer: applies the lexicon to each sentence with negation-aware
//! polarity flipping.
//!
//! Matching is plain substring counting of the stemmed phrase inside the
//! stemmed sentence, so `bear` also fires inside `bearing`. The negation
//! window on the other hand looks for the *raw* phrase among the raw
//! lowercase words around a negation marker.

use serde::Serialize;

use crate::analyze::lexicon::{self, LexiconEntry};
use crate::analyze::normalize::Sentence;
use crate::analyze::scoring::CategoryScore;
use crate::decision::Recommendation;

/// Literal cues that mark a sentence as containing negation at all.
const NEGATION_CUES: &[&str] = &["not ", "n't ", "no ", "never ", "without "];

/// A raw word containing any of these is a negation marker.
const NEGATION_MARKERS: &[&str] = &["not", "n't", "no", "never", "without"];

/// Words on each side of a marker that fall under its scope.
const NEGATION_WINDOW: usize = 5;

/// Share of an inverted keyword's weight credited to the opposite polarity.
const INVERSION_CARRY: f64 = 0.5;

/// One lexicon phrase matched inside a sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordHit {
    pub category: Recommendation,
    pub phrase: &'static str,
    pub count: usize,
    pub weight: u32,
    pub inverted: bool,
}

/// Per-sentence outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceScore {
    pub index: usize,
    pub score: CategoryScore,
    pub hits: Vec<KeywordHit>,
}

/// Score one sentence against the whole lexicon.
pub fn score_sentence(sentence: &Sentence<'_>) -> SentenceScore {
    let lower = sentence.lower();
    let stemmed = sentence.stemmed();

    // Raw words are only needed when the sentence has a negation cue.
    let words: Option<Vec<&str>> = has_negation(&lower).then(|| lower.split_whitespace().collect());

    let mut score = CategoryScore::default();
    let mut hits = Vec::new();

    for entry in lexicon::entries() {
        let count = stemmed.matches(entry.stemmed.as_str()).count();
        if count == 0 {
            continue;
        }

        let inverted = match (&words, entry.category.opposite()) {
            (Some(words), Some(_)) => negated_nearby(words, entry.phrase),
            _ => false,
        };

        apply_hit(&mut score, entry, count, inverted);
        hits.push(KeywordHit {
            category: entry.category,
            phrase: entry.phrase,
            count,
            weight: entry.weight,
            inverted,
        });
    }

    SentenceScore {
        index: sentence.index,
        score,
        hits,
    }
}

/// Sum of all sentence scores.
pub fn score_sentences(sentences: &[Sentence<'_>]) -> CategoryScore {
    sentences.iter().map(|s| score_sentence(s).score).sum()
}

/// Add `weight * count` to the entry's category, or, when inverted, take it
/// away and credit half of it to the opposite polarity.
fn apply_hit(acc: &mut CategoryScore, entry: &LexiconEntry, count: usize, inverted: bool) {
    let amount = f64::from(entry.weight) * count as f64;
    match (inverted, entry.category.opposite()) {
        (true, Some(opposite)) => {
            acc.credit(entry.category, -amount);
            acc.credit(opposite, amount * INVERSION_CARRY);
        }
        _ => acc.credit(entry.category, amount),
    }
}

fn has_negation(lower: &str) -> bool {
    NEGATION_CUES.iter().any(|cue| lower.contains(cue))
}

fn is_negation_marker(word: &str) -> bool {
    NEGATION_MARKERS.iter().any(|m| word.contains(m))
}

/// True if some negation marker has `phrase` inside its ±window of words.
fn negated_nearby(words: &[&str], phrase: &str) -> bool {
    words
        .iter()
        .enumerate()
        .filter(|(_, w)| is_negation_marker(w))
        .any(|(i, _)| {
            let lo = i.saturating_sub(NEGATION_WINDOW);
            let hi = (i + NEGATION_WINDOW + 1).min(words.len());
            words[lo..hi].join(" ").contains(phrase)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> SentenceScore {
        score_sentence(&Sentence { index: 0, text })
    }

    #[test]
    fn plain_sell_sentence() {
        let s = score("The stock declined sharply");
        assert_eq!(s.score, CategoryScore { buy: 0.0, sell: 4.0, hold: 0.0 });
        assert!(s.hits.iter().all(|h| !h.inverted));
    }

    #[test]
    fn negated_buy_keyword_flips_polarity() {
        let plain = score("The company saw growth this quarter");
        let negated = score("The company did not see growth this quarter");
        // growth, grow and growing all hit the stem; only the first two
        // appear verbatim next to "not".
        assert_eq!(plain.score.buy, 6.0);
        assert_eq!(negated.score.buy, -2.0);
        assert_eq!(negated.score.sell, 2.0);
        assert!(negated.score.buy < plain.score.buy);
    }

    #[test]
    fn distant_negation_scores_normally() {
        let s = score(
            "Growth was solid across all major business units although management did not comment further",
        );
        assert_eq!(s.score.buy, 6.0);
        assert_eq!(s.score.sell, 0.0);
        assert!(s.hits.iter().all(|h| !h.inverted));
    }

    #[test]
    fn hold_keywords_ignore_negation() {
        let s = score("Shares did not hold steady");
        assert_eq!(s.score, CategoryScore { buy: 0.0, sell: 0.0, hold: 8.0 });
    }

    #[test]
    fn proximity_uses_raw_phrase_while_count_uses_stems() {
        // All three `declin*` entries match the stem, but only the literal
        // "decline" sits in the raw window; "revenue" also carries "even".
        let s = score("Revenue did not decline");
        assert_eq!(s.score, CategoryScore { buy: 1.0, sell: 2.0, hold: 1.0 });
        let inverted: Vec<_> = s.hits.iter().filter(|h| h.inverted).map(|h| h.phrase).collect();
        assert_eq!(inverted, vec!["decline"]);
    }

    #[test]
    fn later_marker_inverts_when_first_window_misses() {
        let text = "No comment was given by the board about it but revenue did not show growth";
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();
        // "no" opens the sentence, ten words before "growth".
        assert!(!words[..6].join(" ").contains("growth"));
        assert!(negated_nearby(&words, "growth"));

        let s = score(text);
        assert_eq!(s.score.buy, -2.0);
        assert_eq!(s.score.sell, 2.0);
        let inverted: Vec<_> = s.hits.iter().filter(|h| h.inverted).map(|h| h.phrase).collect();
        assert_eq!(inverted, vec!["growth", "grow"]);
    }

    #[test]
    fn sentences_sum() {
        let sentences = [
            Sentence { index: 0, text: "The stock declined sharply" },
            Sentence { index: 1, text: "The company saw growth this quarter" },
        ];
        assert_eq!(
            score_sentences(&sentences),
            CategoryScore { buy: 6.0, sell: 4.0, hold: 0.0 }
        );
    }

    #[test]
    fn marker_detection_is_substring_based() {
        assert!(is_negation_marker("isn't"));
        assert!(is_negation_marker("nothing"));
        assert!(!is_negation_marker("growth"));
    }
}
