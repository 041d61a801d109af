//! The aggregation stage: corpus-level statistics and the insight summary.

mod model;

pub use model::{InsightSummary, Outlook, SentimentCounts};

use std::collections::BTreeMap;

use crate::core::models::{Article, Bias, Impact};

/// Fixed risk list rendered alongside every insight.
pub const RISKS: &[&str] = &[
    "Market volatility from recent news",
    "Regulatory uncertainty",
    "Competitive pressures",
];

/// Fixed opportunity list rendered alongside every insight.
pub const OPPORTUNITIES: &[&str] = &[
    "Growth momentum in sector",
    "Innovation opportunities",
    "Market expansion potential",
];

const RISK_LEVEL: &str = "Medium";

/// Counts articles per bias label.
pub fn bias_histogram(articles: &[Article]) -> BTreeMap<Bias, usize> {
    let mut histogram = BTreeMap::new();
    for a in articles {
        *histogram.entry(a.bias).or_insert(0) += 1;
    }
    histogram
}

/// Counts high-impact articles (the dashboard's "requires attention" card).
pub fn high_impact_count(articles: &[Article]) -> usize {
    articles.iter().filter(|a| a.impact == Impact::High).count()
}

/// Produces the insight summary for one classified batch.
///
/// The bullish/mixed phrase in the summary text and the outlook share one
/// gate: the positive count must strictly exceed half the batch size
/// (`2 * positive > len`, exact for odd sizes). Total for any batch,
/// including an empty one, which comes out Neutral/"mixed".
pub fn generate(articles: &[Article], topic: &str) -> InsightSummary {
    let counts = SentimentCounts::tally(articles);
    let bullish = 2 * counts.positive > articles.len();

    let summary = format!(
        "Analysis of {} recent articles on {}. Market sentiment shows {} signals. \
         Key themes emerging across sources.",
        articles.len(),
        topic,
        if bullish { "bullish" } else { "mixed" },
    );

    InsightSummary {
        summary,
        outlook: if bullish {
            Outlook::MildlyBullish
        } else {
            Outlook::Neutral
        },
        risk_level: RISK_LEVEL,
        risks: RISKS,
        opportunities: OPPORTUNITIES,
    }
}
