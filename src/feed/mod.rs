//! The stateful pipeline controller.
//!
//! [`NewsFeed`] owns the view state the pipeline feeds: the active segment,
//! the free-text search override, the current classified batch, and the
//! current insight summary. State changes go through the transition methods
//! (`set_segment`, `submit_search`, `refresh`); each runs one full fetch
//! cycle and replaces the batch and insight wholesale.

use rand::{Rng, rngs::ThreadRng};
use std::collections::BTreeMap;

use crate::{
    classify,
    core::NewsClient,
    core::models::{Article, Bias},
    everything::EverythingBuilder,
    insight::{self, InsightSummary, SentimentCounts},
    mock,
    segment::Segment,
};

/// A segmented news feed with heuristic annotation and aggregate insights.
///
/// A feed starts on the investments segment with an empty batch; call
/// [`refresh`](NewsFeed::refresh) (or any other transition) to run the first
/// fetch cycle. No transition returns a hard error: when the live fetch
/// yields no usable data, the current segment's static dataset substitutes
/// for it and the cycle completes normally.
///
/// The feed is generic over its randomness source, which only feeds the
/// placeholder impact/relevance assignment. [`NewsFeed::new`] uses the
/// thread-local rng; tests inject a seeded one via [`NewsFeed::with_rng`].
pub struct NewsFeed<R: Rng = ThreadRng> {
    client: NewsClient,
    rng: R,
    segment: Segment,
    search: String,
    articles: Vec<Article>,
    insight: Option<InsightSummary>,
    fallback: bool,
    generation: u64,
}

impl NewsFeed {
    /// Creates a feed using the thread-local randomness source.
    pub fn new(client: &NewsClient) -> Self {
        Self::with_rng(client, rand::rng())
    }
}

impl<R: Rng> NewsFeed<R> {
    /// Creates a feed with an injected randomness source.
    pub fn with_rng(client: &NewsClient, rng: R) -> Self {
        Self {
            client: client.clone(),
            rng,
            segment: Segment::Investments,
            search: String::new(),
            articles: Vec::new(),
            insight: None,
            fallback: false,
            generation: 0,
        }
    }

    /* ---------------- Accessors ---------------- */

    /// The active segment.
    pub const fn segment(&self) -> Segment {
        self.segment
    }

    /// The current classified batch.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// The insight summary for the current batch, once a cycle has run.
    pub const fn insight(&self) -> Option<&InsightSummary> {
        self.insight.as_ref()
    }

    /// Whether the current batch came from the fallback dataset.
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Sentiment histogram over the current batch.
    pub fn sentiment_counts(&self) -> SentimentCounts {
        SentimentCounts::tally(&self.articles)
    }

    /// Bias distribution over the current batch.
    pub fn bias_histogram(&self) -> BTreeMap<Bias, usize> {
        insight::bias_histogram(&self.articles)
    }

    /// Number of high-impact articles in the current batch.
    pub fn high_impact_count(&self) -> usize {
        insight::high_impact_count(&self.articles)
    }

    /* ---------------- Transitions ---------------- */

    /// Switches to a segment, clearing any search override, and refetches.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(segment = %segment)))]
    pub async fn set_segment(&mut self, segment: Segment) {
        self.segment = segment;
        self.search.clear();
        self.run_cycle().await;
    }

    /// Submits a free-text search that overrides the segment query.
    ///
    /// A blank query is a no-op; the current batch stays in place.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, query)))]
    pub async fn submit_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return;
        }
        self.search = trimmed.to_string();
        self.run_cycle().await;
    }

    /// Re-runs the active query (the search override when one is set,
    /// otherwise the segment's canned query). No backoff, no retry.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(segment = %self.segment)))]
    pub async fn refresh(&mut self) {
        self.run_cycle().await;
    }

    /* ---------------- Fetch cycle ---------------- */

    fn active_query(&self) -> String {
        if self.search.is_empty() {
            self.segment.query().to_string()
        } else {
            self.search.clone()
        }
    }

    async fn run_cycle(&mut self) {
        // Stale-response guard: a completion only applies if no newer
        // request generation has been issued while it was in flight.
        self.generation += 1;
        let token = self.generation;

        let query = self.active_query();
        let result = EverythingBuilder::new(&self.client, &query).fetch().await;

        if token != self.generation {
            return;
        }

        let (articles, fallback) = match result {
            Ok(raws) => (
                raws.into_iter()
                    .map(|raw| classify::annotate(raw, &mut self.rng))
                    .collect(),
                false,
            ),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, segment = %self.segment, "live fetch failed, substituting fallback dataset");
                (mock::articles(self.segment), true)
            }
        };

        // The insight topic mirrors what was asked for: the full query on a
        // live batch, the search text or segment key on a fallback one.
        let topic = if fallback {
            if self.search.is_empty() {
                self.segment.key().to_string()
            } else {
                self.search.clone()
            }
        } else {
            query
        };

        self.articles = articles;
        self.fallback = fallback;
        self.insight = Some(insight::generate(&self.articles, &topic));
    }
}
