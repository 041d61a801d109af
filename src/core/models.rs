use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::fmt;

/// Heuristic sentiment label derived from an article's title and summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// At least one positive keyword matched and no negative keyword did.
    Positive,
    /// At least one negative keyword matched and no positive keyword did.
    Negative,
    /// Both keyword sets matched, or neither did.
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        })
    }
}

/// Coarse editorial-lean tag assigned by publisher-name lookup, not by
/// content analysis. Unrecognized publishers default to [`Bias::Center`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bias {
    Left,
    Right,
    Center,
    ProMarket,
    TechPositive,
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::ProMarket => "pro-market",
            Self::TechPositive => "tech-positive",
        })
    }
}

/// Placeholder severity tag.
///
/// The live fetch path assigns `High` or `Medium` by a fair coin flip;
/// `Low` only appears in the hand-authored fallback datasets. Not a
/// content-derived signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        })
    }
}

/// A single classified news article, the canonical record flowing out of the
/// pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// Identifier within the current batch. Live batches number articles by
    /// position (0-based); the fallback datasets carry hand-authored 1-based
    /// ids. Not stable across fetches.
    pub id: usize,
    /// The headline. `"Untitled"` when the provider omitted it.
    pub title: String,
    /// Display name of the publisher. `"Unknown Source"` when absent.
    pub source: String,
    /// A direct link to the article, when the provider supplied one.
    pub url: Option<String>,
    /// Original publish instant. `None` when the provider's timestamp was
    /// absent or unparsable. Render via [`Article::published_display`].
    pub published_at: Option<DateTime<Utc>>,
    /// Sentiment label, a pure function of title + summary text.
    pub sentiment: Sentiment,
    /// Bias label, a pure function of the source name.
    pub bias: Bias,
    /// Placeholder severity tag (see [`Impact`]).
    pub impact: Impact,
    /// Placeholder relevance score in `[0.85, 1.0)` on the live path;
    /// editorially fixed in the fallback datasets.
    pub relevance: f64,
    /// Short description text; falls back to the title when the provider
    /// gave no description.
    pub summary: String,
}

impl Article {
    /// Renders the publish instant in the consumer's local time, or an empty
    /// string when no timestamp survived normalization.
    ///
    /// The instant itself is kept on the record so downstream consumers are
    /// not stuck with display text.
    pub fn published_display(&self) -> String {
        self.published_at
            .map(|t| {
                t.with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
            })
            .unwrap_or_default()
    }
}
