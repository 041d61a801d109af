use chrono::{DateTime, Utc};
use url::Url;

use crate::{
    core::{NewsClient, NewsError},
    everything::{model::RawArticle, wire},
};

/// Fallback headline for articles the provider ships without a title.
pub(crate) const UNTITLED: &str = "Untitled";
/// Fallback publisher name.
pub(crate) const UNKNOWN_SOURCE: &str = "Unknown Source";

pub(super) async fn fetch_everything(
    client: &NewsClient,
    query: &str,
    page_size: u32,
    language: &str,
    sort_by: &str,
) -> Result<Vec<RawArticle>, NewsError> {
    let mut url = client.base_everything().clone();
    append_query_params(&mut url, query, page_size, language, sort_by, client.api_key());

    let resp = client
        .http()
        .get(url.clone())
        .header("accept", "application/json")
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(NewsError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = resp.text().await?;
    let envelope: wire::EverythingEnvelope = serde_json::from_str(&body)?;

    let articles = envelope.articles.unwrap_or_default();
    if articles.is_empty() {
        return Err(NewsError::DataUnavailable(format!(
            "no articles returned for query '{query}'"
        )));
    }

    Ok(articles
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| normalize(idx, raw))
        .collect())
}

/// Maps one provider record to the canonical pre-classification shape,
/// assigning the batch-positional id.
fn normalize(idx: usize, raw: wire::WireArticle) -> RawArticle {
    let title = raw
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());
    let source = raw
        .source
        .and_then(|s| s.name)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());
    let summary = raw
        .description
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| title.clone());
    let published_at = raw
        .published_at
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Utc));

    RawArticle {
        id: idx,
        title,
        source,
        url: raw.url,
        published_at,
        summary,
    }
}

fn append_query_params(
    url: &mut Url,
    query: &str,
    page_size: u32,
    language: &str,
    sort_by: &str,
    api_key: &str,
) {
    let mut qp = url.query_pairs_mut();
    qp.append_pair("q", query);
    qp.append_pair("sortBy", sort_by);
    qp.append_pair("pageSize", &page_size.to_string());
    qp.append_pair("language", language);
    qp.append_pair("apiKey", api_key);
}
