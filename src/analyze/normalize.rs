//! Text normalization: sentence split, tokenizer and the suffix stemmer.
//!
//! The stemmer is deliberately tiny: it strips one of `ing`, `ed`, `es`, `s`
//! from words longer than four characters, and nothing else. Lexicon phrases
//! go through the exact same path so that stemmed keys line up with stemmed
//! sentences.

use once_cell::sync::Lazy;
use regex::Regex;

/// `.`, `!` or `?` followed by whitespace or by the end of the text.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?](?:\s+|$)").expect("sentence boundary regex"));

/// A sentence span of the original text with its position in the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub index: usize,
    pub text: &'a str,
}

impl<'a> Sentence<'a> {
    /// Lowercased copy used for cue checks and proximity windows.
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    /// Stemmed tokens joined by a single space.
    pub fn stemmed(&self) -> String {
        stem_phrase(self.text)
    }
}

/// Split `text` into sentences, keeping original casing.
///
/// Pieces that are blank after trimming are dropped; the survivors keep the
/// index they had in the raw split so callers can tie-break on position.
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    SENTENCE_BOUNDARY
        .split(text)
        .enumerate()
        .filter(|(_, piece)| !piece.trim().is_empty())
        .map(|(index, piece)| Sentence { index, text: piece })
        .collect()
}

/// Lowercased whitespace tokens after replacing every character that is not
/// alphanumeric, `_`, whitespace or sentence punctuation with a space.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| if keep_char(c) { c } else { ' ' })
        .collect();
    cleaned
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[inline]
fn keep_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c.is_whitespace() || matches!(c, '.' | '!' | '?')
}

/// Strip a single inflectional suffix. Words of four characters or fewer
/// are returned untouched.
pub fn stem(word: &str) -> &str {
    if word.chars().count() <= 4 {
        return word;
    }
    if let Some(s) = word.strip_suffix("ing") {
        s
    } else if let Some(s) = word.strip_suffix("ed") {
        s
    } else if let Some(s) = word.strip_suffix("es") {
        s
    } else if word.ends_with('s') && !word.ends_with("ss") {
        &word[..word.len() - 1]
    } else {
        word
    }
}

/// Tokenize, stem each token, join with single spaces.
pub fn stem_phrase(text: &str) -> String {
    tokenize(text)
        .iter()
        .map(|t| stem(t))
        .collect::<Vec<_>>()
        .join(" ")
}
