use httpmock::{Method::GET, MockServer};
use newslens_rs::{EverythingBuilder, NewsClient, NewsError};
use serde_json::json;
use url::Url;

fn client_for(server: &MockServer) -> NewsClient {
    NewsClient::builder()
        .base_everything(Url::parse(&format!("{}/v2/everything", server.base_url())).unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn offline_fetch_sends_expected_params_and_normalizes() {
    let server = MockServer::start();
    let query = "stock market investing finance";

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", query)
            .query_param("sortBy", "publishedAt")
            .query_param("pageSize", "20")
            .query_param("language", "en")
            .query_param("apiKey", "demo");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("everything_ok.json"));
    });

    let client = client_for(&server);
    let articles = EverythingBuilder::new(&client, query).fetch().await.unwrap();

    mock.assert();

    assert_eq!(articles.len(), 3);
    // Ids are positional within the batch, 0-based.
    assert_eq!(articles.iter().map(|a| a.id).collect::<Vec<_>>(), vec![0, 1, 2]);

    let first = &articles[0];
    assert_eq!(first.title, "Tech Stocks Surge as Chipmakers Report Record Profit");
    assert_eq!(first.source, "Bloomberg");
    assert_eq!(first.summary, "Semiconductor gains lead a broad market rally.");
    assert_eq!(
        first.url.as_deref(),
        Some("https://bloomberg.com/markets/chip-rally")
    );
    assert!(first.published_at.is_some());

    // A missing description falls back to the title.
    let third = &articles[2];
    assert_eq!(third.summary, third.title);
}

#[tokio::test]
async fn offline_fetch_coerces_missing_fields_to_literals() {
    let server = MockServer::start();

    let body = json!({
        "status": "ok",
        "totalResults": 1,
        "articles": [
            { "source": null, "title": null, "description": null, "url": null, "publishedAt": null }
        ]
    });

    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body(body.to_string());
    });

    let client = client_for(&server);
    let articles = EverythingBuilder::new(&client, "anything").fetch().await.unwrap();

    assert_eq!(articles.len(), 1);
    let article = &articles[0];
    assert_eq!(article.title, "Untitled");
    assert_eq!(article.source, "Unknown Source");
    assert_eq!(article.summary, "Untitled");
    assert!(article.url.is_none());
    assert!(article.published_at.is_none());
}

#[tokio::test]
async fn offline_fetch_maps_http_failure_to_status_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(500).body("upstream exploded");
    });

    let client = client_for(&server);
    let err = EverythingBuilder::new(&client, "tech")
        .fetch()
        .await
        .unwrap_err();

    match err {
        NewsError::Status { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Status error, got {other}"),
    }
}

#[tokio::test]
async fn offline_fetch_treats_empty_article_list_as_unavailable() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body(json!({ "status": "ok", "totalResults": 0, "articles": [] }).to_string());
    });

    let client = client_for(&server);
    let err = EverythingBuilder::new(&client, "tech")
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, NewsError::DataUnavailable(_)));
}

#[tokio::test]
async fn offline_builder_overrides_page_size_language_and_key() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("pageSize", "5")
            .query_param("language", "de")
            .query_param("apiKey", "secret-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("everything_ok.json"));
    });

    let client = NewsClient::builder()
        .base_everything(Url::parse(&format!("{}/v2/everything", server.base_url())).unwrap())
        .api_key("secret-key")
        .build()
        .unwrap();

    let articles = EverythingBuilder::new(&client, "dax")
        .page_size(5)
        .language("de")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(articles.len(), 3);
}
