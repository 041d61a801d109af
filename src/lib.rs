//! newslens-rs: financial news annotation pipeline.
//!
//! Fetches recent articles for a topic or free-text query from a
//! NewsAPI-style endpoint, normalizes them into canonical records, tags each
//! with a heuristic sentiment label and a publisher-bias label, and produces
//! corpus-level statistics plus a short insight summary. When the live fetch
//! yields no usable data, a static per-segment dataset substitutes for it, so
//! a feed always holds a non-empty batch.
//!
//! ```no_run
//! # use newslens_rs::{NewsClient, NewsFeed, Segment};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NewsClient::builder().api_key("demo").build()?;
//! let mut feed = NewsFeed::new(&client);
//!
//! feed.set_segment(Segment::Tech).await;
//! for article in feed.articles() {
//!     println!("[{}] {} ({})", article.sentiment, article.title, article.bias);
//! }
//! if let Some(insight) = feed.insight() {
//!     println!("Outlook: {}", insight.outlook);
//! }
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod core;
pub mod everything;
pub mod feed;
pub mod insight;
pub mod mock;
pub mod segment;

pub use crate::core::{NewsClient, NewsClientBuilder, NewsError};
pub use crate::core::models::{Article, Bias, Impact, Sentiment};
pub use everything::{EverythingBuilder, RawArticle};
pub use feed::NewsFeed;
pub use insight::{InsightSummary, Outlook, SentimentCounts};
pub use segment::Segment;
