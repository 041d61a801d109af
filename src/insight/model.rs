use serde::Serialize;
use std::fmt;

use crate::core::models::{Article, Sentiment};

/// Sentiment histogram over one article batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    /// Tallies the batch. Buckets always sum to the batch size.
    pub fn tally(articles: &[Article]) -> Self {
        let mut counts = Self::default();
        for a in articles {
            match a.sentiment {
                Sentiment::Positive => counts.positive += 1,
                Sentiment::Neutral => counts.neutral += 1,
                Sentiment::Negative => counts.negative += 1,
            }
        }
        counts
    }

    pub const fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Positive share as a percentage, 0 for an empty batch.
    pub fn positive_pct(&self) -> u32 {
        Self::pct(self.positive, self.total())
    }

    pub fn neutral_pct(&self) -> u32 {
        Self::pct(self.neutral, self.total())
    }

    pub fn negative_pct(&self) -> u32 {
        Self::pct(self.negative, self.total())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    fn pct(part: usize, total: usize) -> u32 {
        if total == 0 {
            0
        } else {
            ((part as f64 / total as f64) * 100.0).round() as u32
        }
    }
}

/// Corpus-level outlook, gated on positive sentiment holding a strict
/// majority of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outlook {
    #[serde(rename = "Mildly Bullish")]
    MildlyBullish,
    Neutral,
}

impl fmt::Display for Outlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MildlyBullish => "Mildly Bullish",
            Self::Neutral => "Neutral",
        })
    }
}

/// One generated insight per fetch cycle. Transient; a new batch replaces it
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightSummary {
    /// Generated summary text.
    pub summary: String,
    /// `Mildly Bullish` iff the positive count strictly exceeds half the
    /// batch size.
    pub outlook: Outlook,
    /// Fixed literal; not derived from the data.
    pub risk_level: &'static str,
    /// Fixed three-entry list; not derived from the data.
    pub risks: &'static [&'static str],
    /// Fixed three-entry list; not derived from the data.
    pub opportunities: &'static [&'static str],
}
