//! Static classification tables.
//!
//! These are configuration data, not logic: an unordered keyword membership
//! test for sentiment, and an ordered publisher-substring table for bias
//! where the first match wins.

use crate::core::models::Bias;

/// Keywords whose presence (as a substring) marks text as positive.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "surge",
    "growth",
    "success",
    "profit",
    "innovation",
    "breakthrough",
    "gains",
    "rises",
];

/// Keywords whose presence (as a substring) marks text as negative.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "crisis",
    "falls",
    "decline",
    "loss",
    "concern",
    "warning",
    "cuts",
    "drops",
];

/// Known-publisher substrings mapped to bias labels, in lookup order.
pub const BIAS_TABLE: &[(&str, Bias)] = &[
    ("bloomberg", Bias::Center),
    ("reuters", Bias::Center),
    ("financial times", Bias::Center),
    ("cnbc", Bias::ProMarket),
    ("wall street journal", Bias::Right),
    ("new york times", Bias::Left),
    ("techcrunch", Bias::TechPositive),
    ("the verge", Bias::Center),
    ("forbes", Bias::ProMarket),
    ("cnn", Bias::Left),
    ("fox news", Bias::Right),
    ("bbc", Bias::Center),
    ("associated press", Bias::Center),
    ("wired", Bias::TechPositive),
];
