//! The fallback article tables. Pure data, no logic.

use crate::core::models::{Bias, Impact, Sentiment};

pub(super) struct Row {
    pub id: usize,
    pub title: &'static str,
    pub source: &'static str,
    pub bias: Bias,
    pub sentiment: Sentiment,
    pub hours_ago: i64,
    pub summary: &'static str,
    pub relevance: f64,
    pub impact: Impact,
    pub url: &'static str,
}

pub(super) const INVESTMENTS: &[Row] = &[
    Row {
        id: 1,
        title: "Stock Market Reaches New Highs Amid Strong Earnings Season",
        source: "Bloomberg",
        bias: Bias::Center,
        sentiment: Sentiment::Positive,
        hours_ago: 2,
        summary: "Major indices hit record levels as tech companies report better-than-expected quarterly results.",
        relevance: 0.95,
        impact: Impact::High,
        url: "https://bloomberg.com",
    },
    Row {
        id: 2,
        title: "Federal Reserve Signals Potential Interest Rate Changes",
        source: "Reuters",
        bias: Bias::Center,
        sentiment: Sentiment::Neutral,
        hours_ago: 4,
        summary: "Central bank officials hint at policy shifts in response to economic indicators.",
        relevance: 0.92,
        impact: Impact::High,
        url: "https://reuters.com",
    },
    Row {
        id: 3,
        title: "Tech Sector Leads Market Rally with AI Momentum",
        source: "CNBC",
        bias: Bias::ProMarket,
        sentiment: Sentiment::Positive,
        hours_ago: 6,
        summary: "Technology stocks surge as artificial intelligence investments drive growth.",
        relevance: 0.89,
        impact: Impact::Medium,
        url: "https://cnbc.com",
    },
];

pub(super) const TECH: &[Row] = &[
    Row {
        id: 1,
        title: "AI Startup Raises $500M Series C Led by Top VCs",
        source: "TechCrunch",
        bias: Bias::TechPositive,
        sentiment: Sentiment::Positive,
        hours_ago: 1,
        summary: "Machine learning platform secures massive funding round at $5B valuation.",
        relevance: 0.96,
        impact: Impact::High,
        url: "https://techcrunch.com",
    },
    Row {
        id: 2,
        title: "OpenAI Announces Major Product Updates and API Improvements",
        source: "The Verge",
        bias: Bias::Center,
        sentiment: Sentiment::Positive,
        hours_ago: 3,
        summary: "Company unveils new features and pricing tiers for developers.",
        relevance: 0.93,
        impact: Impact::Medium,
        url: "https://theverge.com",
    },
    Row {
        id: 3,
        title: "Quantum Computing Breakthrough Announced by Research Team",
        source: "Wired",
        bias: Bias::TechPositive,
        sentiment: Sentiment::Positive,
        hours_ago: 5,
        summary: "Scientists achieve significant milestone in quantum error correction.",
        relevance: 0.88,
        impact: Impact::Medium,
        url: "https://wired.com",
    },
];

pub(super) const BUSINESS: &[Row] = &[
    Row {
        id: 1,
        title: "Major Corporate Merger Creates Industry Giant",
        source: "Wall Street Journal",
        bias: Bias::Right,
        sentiment: Sentiment::Neutral,
        hours_ago: 2,
        summary: "Two leading companies announce strategic merger valued at $50 billion.",
        relevance: 0.94,
        impact: Impact::High,
        url: "https://wsj.com",
    },
    Row {
        id: 2,
        title: "Global Supply Chain Shows Signs of Recovery",
        source: "Financial Times",
        bias: Bias::Center,
        sentiment: Sentiment::Positive,
        hours_ago: 4,
        summary: "Shipping delays decrease as logistics networks adapt to new normal.",
        relevance: 0.9,
        impact: Impact::Medium,
        url: "https://ft.com",
    },
];

pub(super) const POLITICS: &[Row] = &[
    Row {
        id: 1,
        title: "New Economic Policy Proposal Sparks Debate",
        source: "Associated Press",
        bias: Bias::Center,
        sentiment: Sentiment::Neutral,
        hours_ago: 3,
        summary: "Lawmakers propose comprehensive economic reform package.",
        relevance: 0.91,
        impact: Impact::High,
        url: "https://apnews.com",
    },
    Row {
        id: 2,
        title: "International Trade Agreement Reaches Final Stage",
        source: "BBC News",
        bias: Bias::Center,
        sentiment: Sentiment::Positive,
        hours_ago: 5,
        summary: "Multiple nations prepare to sign landmark trade deal.",
        relevance: 0.87,
        impact: Impact::Medium,
        url: "https://bbc.com",
    },
];

pub(super) const ENTERTAINMENT: &[Row] = &[
    Row {
        id: 1,
        title: "Streaming Platform Announces Record Subscriber Growth",
        source: "Variety",
        bias: Bias::Center,
        sentiment: Sentiment::Positive,
        hours_ago: 2,
        summary: "Major streaming service adds 10 million subscribers in Q4.",
        relevance: 0.92,
        impact: Impact::High,
        url: "https://variety.com",
    },
    Row {
        id: 2,
        title: "Box Office Numbers Show Strong Recovery",
        source: "Hollywood Reporter",
        bias: Bias::Center,
        sentiment: Sentiment::Positive,
        hours_ago: 4,
        summary: "Theater attendance rebounds to pre-pandemic levels.",
        relevance: 0.88,
        impact: Impact::Medium,
        url: "https://hollywoodreporter.com",
    },
];

pub(super) const FASHION: &[Row] = &[
    Row {
        id: 1,
        title: "Sustainable Fashion Startup Secures Investment from Luxury Brands",
        source: "Vogue Business",
        bias: Bias::Center,
        sentiment: Sentiment::Positive,
        hours_ago: 2,
        summary: "Circular fashion platform partners with major retailers for eco-friendly initiatives.",
        relevance: 0.89,
        impact: Impact::Medium,
        url: "https://voguebusiness.com",
    },
    Row {
        id: 2,
        title: "Fashion Tech Company Launches AI-Powered Style Assistant",
        source: "WWD",
        bias: Bias::Center,
        sentiment: Sentiment::Positive,
        hours_ago: 5,
        summary: "New app uses machine learning to provide personalized fashion recommendations.",
        relevance: 0.86,
        impact: Impact::Low,
        url: "https://wwd.com",
    },
];

pub(super) const TRENDS: &[Row] = &[
    Row {
        id: 1,
        title: "B2B SaaS Startups See Record Funding in Q4",
        source: "Crunchbase News",
        bias: Bias::Center,
        sentiment: Sentiment::Positive,
        hours_ago: 1,
        summary: "Enterprise software companies attract significant venture capital despite market conditions.",
        relevance: 0.94,
        impact: Impact::High,
        url: "https://news.crunchbase.com",
    },
    Row {
        id: 2,
        title: "Climate Tech Emerges as Hottest Startup Sector",
        source: "TechCrunch",
        bias: Bias::TechPositive,
        sentiment: Sentiment::Positive,
        hours_ago: 3,
        summary: "Investors pour billions into clean energy and sustainability startups.",
        relevance: 0.91,
        impact: Impact::High,
        url: "https://techcrunch.com",
    },
];
