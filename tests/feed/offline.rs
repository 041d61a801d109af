use httpmock::{Method::GET, MockServer};
use newslens_rs::insight::Outlook;
use newslens_rs::{Bias, Impact, NewsClient, NewsFeed, Segment, Sentiment};
use rand::{SeedableRng, rngs::StdRng};
use serde_json::json;
use url::Url;

fn client_for(server: &MockServer) -> NewsClient {
    NewsClient::builder()
        .base_everything(Url::parse(&format!("{}/v2/everything", server.base_url())).unwrap())
        .build()
        .unwrap()
}

fn empty_payload() -> String {
    json!({ "status": "ok", "totalResults": 0, "articles": [] }).to_string()
}

#[tokio::test]
async fn empty_payload_for_investments_falls_back_to_mock_list() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "stock market investing finance");
        then.status(200)
            .header("content-type", "application/json")
            .body(empty_payload());
    });

    let client = client_for(&server);
    let mut feed = NewsFeed::new(&client);
    feed.refresh().await;

    mock.assert();
    assert!(feed.is_fallback());

    let articles = feed.articles();
    assert_eq!(articles.len(), 3);
    assert_eq!(articles.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(
        articles.iter().map(|a| a.source.as_str()).collect::<Vec<_>>(),
        vec!["Bloomberg", "Reuters", "CNBC"]
    );

    // 2 of the 3 fixed entries are positive.
    let insight = feed.insight().expect("cycle produces an insight");
    assert_eq!(insight.outlook, Outlook::MildlyBullish);
    assert!(insight.summary.contains("3 recent articles on investments"));
}

#[tokio::test]
async fn live_batch_is_classified_and_summarized() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "technology startups innovation AI");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("everything_ok.json"));
    });

    let client = client_for(&server);
    let mut feed = NewsFeed::with_rng(&client, StdRng::seed_from_u64(7));
    feed.set_segment(Segment::Tech).await;

    mock.assert();
    assert!(!feed.is_fallback());
    assert_eq!(feed.segment(), Segment::Tech);

    let articles = feed.articles();
    assert_eq!(articles.len(), 3);
    assert_eq!(articles.iter().map(|a| a.id).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(
        articles.iter().map(|a| a.sentiment).collect::<Vec<_>>(),
        vec![Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]
    );
    assert_eq!(
        articles.iter().map(|a| a.bias).collect::<Vec<_>>(),
        vec![Bias::Center, Bias::Left, Bias::Center]
    );
    for article in articles {
        assert!((0.85..1.0).contains(&article.relevance));
        assert!(matches!(article.impact, Impact::High | Impact::Medium));
    }

    // The insight topic for a live batch is the full query string.
    let insight = feed.insight().unwrap();
    assert!(
        insight
            .summary
            .contains("3 recent articles on technology startups innovation AI")
    );

    // 1 of 3 positive is not a strict majority.
    assert_eq!(insight.outlook, Outlook::Neutral);

    let counts = feed.sentiment_counts();
    assert_eq!(counts.total(), 3);
    assert_eq!((counts.positive, counts.negative, counts.neutral), (1, 1, 1));

    let histogram = feed.bias_histogram();
    assert_eq!(histogram.get(&Bias::Center), Some(&2));
    assert_eq!(histogram.get(&Bias::Left), Some(&1));
}

#[tokio::test]
async fn blank_search_is_a_no_op() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body(empty_payload());
    });

    let client = client_for(&server);
    let mut feed = NewsFeed::new(&client);
    feed.submit_search("   ").await;

    assert_eq!(mock.hits(), 0);
    assert!(feed.articles().is_empty());
    assert!(feed.insight().is_none());
}

#[tokio::test]
async fn failed_search_falls_back_and_labels_insight_with_the_search_text() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "quantum computing");
        then.status(404).body("not found");
    });

    let client = client_for(&server);
    let mut feed = NewsFeed::new(&client);
    feed.submit_search("quantum computing").await;

    mock.assert();
    assert!(feed.is_fallback());
    // Fallback substitutes the active segment's list (investments).
    assert_eq!(feed.articles().len(), 3);
    assert_eq!(feed.articles()[0].source, "Bloomberg");

    let insight = feed.insight().unwrap();
    assert!(insight.summary.contains("quantum computing"));

    // Refresh keeps the search override active.
    feed.refresh().await;
    assert_eq!(mock.hits(), 2);

    // Switching segments clears it again.
    feed.set_segment(Segment::Politics).await;
    assert_eq!(mock.hits(), 2);
    assert!(feed.is_fallback());
    assert_eq!(feed.articles()[0].source, "Associated Press");
}

#[tokio::test]
async fn each_cycle_replaces_the_batch_wholesale() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "technology startups innovation AI");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("everything_ok.json"));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "business economy corporate");
        then.status(200)
            .header("content-type", "application/json")
            .body(empty_payload());
    });

    let client = client_for(&server);
    let mut feed = NewsFeed::with_rng(&client, StdRng::seed_from_u64(3));

    feed.set_segment(Segment::Tech).await;
    assert_eq!(feed.articles().len(), 3);
    assert!(!feed.is_fallback());

    feed.set_segment(Segment::Business).await;
    assert!(feed.is_fallback());
    // The business fallback list has 2 entries; nothing from the previous
    // batch survives.
    assert_eq!(feed.articles().len(), 2);
    assert_eq!(feed.articles()[0].source, "Wall Street Journal");
}
