use serde::Deserialize;

/* ------------- Minimal serde mapping of /v2/everything ------------- */

#[derive(Deserialize)]
pub(crate) struct EverythingEnvelope {
    #[allow(dead_code)]
    pub(crate) status: Option<String>,
    #[allow(dead_code)]
    #[serde(rename = "totalResults")]
    pub(crate) total_results: Option<u64>,
    pub(crate) articles: Option<Vec<WireArticle>>,
}

#[derive(Deserialize)]
pub(crate) struct WireArticle {
    #[serde(default)]
    pub(crate) source: Option<WireSource>,
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(rename = "publishedAt")]
    #[serde(default)]
    pub(crate) published_at: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct WireSource {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) id: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
}
