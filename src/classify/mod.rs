//! The classification stage: sentiment and bias labels plus the placeholder
//! impact/relevance assignment.

pub mod tables;

use rand::Rng;

use crate::{
    core::models::{Article, Bias, Impact, Sentiment},
    everything::RawArticle,
};
use tables::{BIAS_TABLE, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};

/// Derives a sentiment label from article text.
///
/// Matching is by substring, not whole word: `"dropship"` matches the
/// negative keyword `"drops"`. Positive-only match yields `Positive`,
/// negative-only yields `Negative`, both or neither yield `Neutral`.
pub fn sentiment_of(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    let has_positive = POSITIVE_KEYWORDS.iter().any(|w| lower.contains(w));
    let has_negative = NEGATIVE_KEYWORDS.iter().any(|w| lower.contains(w));

    match (has_positive, has_negative) {
        (true, false) => Sentiment::Positive,
        (false, true) => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}

/// Derives a bias label from a publisher name.
///
/// The source name is lowercased and tested against [`tables::BIAS_TABLE`]
/// in order; the first substring match wins. Unrecognized publishers map to
/// [`Bias::Center`].
pub fn bias_of(source: &str) -> Bias {
    let lower = source.to_lowercase();
    BIAS_TABLE
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map_or(Bias::Center, |&(_, bias)| bias)
}

/// Classifies one normalized article into the canonical [`Article`].
///
/// Sentiment comes from title + summary, bias from the source name. Impact
/// and relevance are explicit placeholders, not content-derived: impact is a
/// fair coin flip over high/medium and relevance a uniform draw in
/// `[0.85, 1.0)`. The randomness source is injected so callers can pin
/// classification down in tests; production callers pass `rand::rng()`.
pub fn annotate<R: Rng + ?Sized>(raw: RawArticle, rng: &mut R) -> Article {
    let sentiment = sentiment_of(&format!("{} {}", raw.title, raw.summary));
    let bias = bias_of(&raw.source);
    let impact = if rng.random_bool(0.5) {
        Impact::High
    } else {
        Impact::Medium
    };
    let relevance = rng.random_range(0.85..1.0);

    Article {
        id: raw.id,
        title: raw.title,
        source: raw.source,
        url: raw.url,
        published_at: raw.published_at,
        sentiment,
        bias,
        impact,
        relevance,
        summary: raw.summary,
    }
}
