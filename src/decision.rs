//! # Recommendation
//! The three-way label shared by the lexicon (as a keyword category) and by the
//! final analysis result, plus the deterministic selector over percentages.

use serde::{Deserialize, Serialize};

use crate::analyze::scoring::SentimentSplit;

/// BUY / HOLD / SELL. Serialized in upper case, as API consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Hold,
    Sell,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Hold => "HOLD",
            Self::Sell => "SELL",
        }
    }

    /// Polarity counterpart used by negation inversion. HOLD has none.
    pub fn opposite(self) -> Option<Self> {
        match self {
            Self::Buy => Some(Self::Sell),
            Self::Sell => Some(Self::Buy),
            Self::Hold => None,
        }
    }

    /// Argmax with fixed precedence: BUY wins any tie it is part of,
    /// then SELL, and HOLD only when neither of the others is a weak maximum.
    pub fn select(split: &SentimentSplit) -> Self {
        let (buy, hold, sell) = (split.buy, split.hold, split.sell);
        if buy >= hold && buy >= sell {
            Self::Buy
        } else if sell >= buy && sell >= hold {
            Self::Sell
        } else {
            Self::Hold
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
