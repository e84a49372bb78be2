//! Category accumulators and the percentage aggregator.
//!
//! `CategoryScore` holds raw, real-valued buy/sell/hold sums (negation can
//! push a category below zero and adds half-weights to the opposite side).
//! `percentages()` turns them into a `SentimentSplit` that sums to ~100.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use crate::decision::Recommendation;

/// Raw accumulators, fresh per analysis call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub buy: f64,
    pub sell: f64,
    pub hold: f64,
}

impl CategoryScore {
    pub fn credit(&mut self, category: Recommendation, amount: f64) {
        match category {
            Recommendation::Buy => self.buy += amount,
            Recommendation::Sell => self.sell += amount,
            Recommendation::Hold => self.hold += amount,
        }
    }

    pub fn get(&self, category: Recommendation) -> f64 {
        match category {
            Recommendation::Buy => self.buy,
            Recommendation::Sell => self.sell,
            Recommendation::Hold => self.hold,
        }
    }

    pub fn total(&self) -> f64 {
        self.buy + self.sell + self.hold
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0.0
    }
}

impl Add for CategoryScore {
    type Output = CategoryScore;

    fn add(self, rhs: CategoryScore) -> CategoryScore {
        CategoryScore {
            buy: self.buy + rhs.buy,
            sell: self.sell + rhs.sell,
            hold: self.hold + rhs.hold,
        }
    }
}

impl AddAssign for CategoryScore {
    fn add_assign(&mut self, rhs: CategoryScore) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for CategoryScore {
    fn sum<I: Iterator<Item = CategoryScore>>(iter: I) -> Self {
        iter.fold(CategoryScore::default(), Add::add)
    }
}

/// Final percentages, each rounded to two decimals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentSplit {
    pub buy: f64,
    pub hold: f64,
    pub sell: f64,
}

impl SentimentSplit {
    /// Returned when nothing in the text scored at all.
    pub const NEUTRAL: SentimentSplit = SentimentSplit {
        buy: 33.33,
        hold: 33.33,
        sell: 33.33,
    };

    pub fn sum(&self) -> f64 {
        self.buy + self.hold + self.sell
    }
}

/// Round to two decimals, ties to even (3.125 -> 3.12, 96.875 -> 96.88).
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Convert raw scores into a clamped, rescaled percentage split.
///
/// A zero grand total short-circuits to `SentimentSplit::NEUTRAL`. Negative
/// shares are clamped to zero and, if the clamped values no longer sum to
/// 100, a single rescale pass is applied. The result sums to 100 within 0.1.
pub fn percentages(score: &CategoryScore) -> SentimentSplit {
    let total = score.total();
    if total == 0.0 {
        return SentimentSplit::NEUTRAL;
    }

    // Comparison instead of `max` so a clamped share is never `-0.0`.
    let share = |v: f64| {
        let pct = round2(v / total * 100.0);
        if pct > 0.0 {
            pct
        } else {
            0.0
        }
    };
    let clamped = SentimentSplit {
        buy: share(score.buy),
        hold: share(score.hold),
        sell: share(score.sell),
    };

    let sum = clamped.sum();
    if sum == 100.0 {
        return clamped;
    }
    if sum <= 0.0 {
        return SentimentSplit::NEUTRAL;
    }

    let rescale = |v: f64| round2(v / sum * 100.0);
    SentimentSplit {
        buy: rescale(clamped.buy),
        hold: rescale(clamped.hold),
        sell: rescale(clamped.sell),
    }
}
