//! Static fallback datasets, one hand-authored article list per segment.
//!
//! These substitute wholesale for the live batch whenever a fetch yields no
//! usable data. Labels, relevance scores, and impact tags here are
//! editorially fixed rather than derived; timestamps are expressed as
//! hour offsets from "now" so the lists always read as recent.

mod data;

use chrono::{Duration, Utc};

use crate::{
    core::models::Article,
    segment::Segment,
};
use data::Row;

fn rows_for(segment: Segment) -> &'static [Row] {
    match segment {
        Segment::Investments => data::INVESTMENTS,
        Segment::Tech => data::TECH,
        Segment::Business => data::BUSINESS,
        Segment::Politics => data::POLITICS,
        Segment::Entertainment => data::ENTERTAINMENT,
        Segment::Fashion => data::FASHION,
        Segment::Trends => data::TRENDS,
    }
}

/// Materializes the fallback article list for a segment.
pub fn articles(segment: Segment) -> Vec<Article> {
    let now = Utc::now();
    rows_for(segment)
        .iter()
        .map(|row| Article {
            id: row.id,
            title: row.title.to_string(),
            source: row.source.to_string(),
            url: Some(row.url.to_string()),
            published_at: Some(now - Duration::hours(row.hours_ago)),
            sentiment: row.sentiment,
            bias: row.bias,
            impact: row.impact,
            relevance: row.relevance,
            summary: row.summary.to_string(),
        })
        .collect()
}

/// Total lookup by segment key. Unknown keys fall back to the investments
/// list, never to an empty one.
pub fn articles_for_key(key: &str) -> Vec<Article> {
    articles(Segment::parse(key).unwrap_or(Segment::Investments))
}
