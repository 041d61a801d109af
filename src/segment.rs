use serde::Serialize;
use std::fmt;

/// One of the seven fixed editorial segments, each mapped to a canned search
/// query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Investments,
    Tech,
    Business,
    Politics,
    Entertainment,
    Fashion,
    Trends,
}

impl Segment {
    /// All segments in dashboard order.
    pub const fn all() -> &'static [Segment] {
        &[
            Self::Investments,
            Self::Tech,
            Self::Business,
            Self::Politics,
            Self::Entertainment,
            Self::Fashion,
            Self::Trends,
        ]
    }

    /// The segment's stable key string.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Investments => "investments",
            Self::Tech => "tech",
            Self::Business => "business",
            Self::Politics => "politics",
            Self::Entertainment => "entertainment",
            Self::Fashion => "fashion",
            Self::Trends => "trends",
        }
    }

    /// Human-readable segment name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Investments => "Investments",
            Self::Tech => "Tech & Startups",
            Self::Business => "Business",
            Self::Politics => "Politics",
            Self::Entertainment => "Entertainment",
            Self::Fashion => "Fashion Startups",
            Self::Trends => "Startup Trends",
        }
    }

    /// The canned search query issued when no free-text search is active.
    pub const fn query(self) -> &'static str {
        match self {
            Self::Investments => "stock market investing finance",
            Self::Tech => "technology startups innovation AI",
            Self::Business => "business economy corporate",
            Self::Politics => "politics government policy",
            Self::Entertainment => "entertainment media streaming",
            Self::Fashion => "fashion startups sustainable fashion tech",
            Self::Trends => "startup trends venture capital funding",
        }
    }

    /// Parses a segment key. Returns `None` for unknown keys; callers that
    /// need a total lookup go through
    /// [`mock::articles_for_key`](crate::mock::articles_for_key).
    pub fn parse(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.key() == key)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
