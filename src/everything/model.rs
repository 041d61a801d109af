use chrono::{DateTime, Utc};
use serde::Serialize;

/// A normalized but not-yet-classified article record.
///
/// Field coercion is deterministic: missing titles, source names, and
/// descriptions fall back to literals rather than dropping the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawArticle {
    /// Positional index within the current batch (0-based). A rerun of the
    /// same query may reorder provider results and reassign ids; this is a
    /// known limitation of positional identity, kept deliberately.
    pub id: usize,
    /// The headline, or `"Untitled"`.
    pub title: String,
    /// Publisher display name, or `"Unknown Source"`.
    pub source: String,
    /// A direct link to the article.
    pub url: Option<String>,
    /// Publish instant parsed from the provider's RFC 3339 timestamp.
    pub published_at: Option<DateTime<Utc>>,
    /// Description text, falling back to the title.
    pub summary: String,
}
