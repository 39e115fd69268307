use medharvest::fetch::ArxivFetcher;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn entry(id: &str, title: &str) -> String {
    format!(
        r#"<entry>
    <id>{id}</id>
    <published>2024-01-14T12:00:00Z</published>
    <title>{title}</title>
    <summary>Some abstract text.</summary>
    <author><name>Alice Example</name></author>
    <link href="{id}" rel="alternate" type="text/html"/>
  </entry>"#
    )
}

fn feed(entries: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query</title>
  {}
</feed>"#,
        entries.join("\n")
    )
}

#[tokio::test]
async fn fetch_query_sends_expected_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("search_query", "ti:cardiology"))
        .and(query_param("max_results", "5"))
        .and(query_param("sortBy", "submittedDate"))
        .and(query_param("sortOrder", "descending"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed(&[entry(
            "http://arxiv.org/abs/2401.01234v1",
            "Cardiac Imaging",
        )])))
        .mount(&server)
        .await;

    let fetcher = ArxivFetcher::with_base_url(&server.uri(), 5).unwrap();
    let papers = fetcher.fetch_query("ti:cardiology").await.unwrap();

    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].title, "Cardiac Imaging");
    assert_eq!(papers[0].authors, vec!["Alice Example"]);
}

#[tokio::test]
async fn fetch_query_propagates_http_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let fetcher = ArxivFetcher::with_base_url(&server.uri(), 5).unwrap();
    assert!(fetcher.fetch_query("ti:cardiology").await.is_err());
}

#[tokio::test]
async fn failing_query_does_not_suppress_other_queries() {
    let server = MockServer::start().await;

    // One query succeeds; every other query gets a server error.
    Mock::given(method("GET"))
        .and(query_param("search_query", "ti:cardiology"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed(&[entry(
            "http://arxiv.org/abs/2401.01234v1",
            "Cardiac Imaging",
        )])))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = ArxivFetcher::with_base_url(&server.uri(), 5).unwrap();
    let papers = fetcher.fetch_all().await;

    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].id, "http://arxiv.org/abs/2401.01234v1");
}

#[tokio::test]
async fn fetch_all_deduplicates_across_queries_first_seen_wins() {
    let server = MockServer::start().await;

    // The same paper appears in two query results under two titles; the
    // first-seen copy must win and appear exactly once.
    Mock::given(method("GET"))
        .and(query_param("search_query", "cat:q-bio.NC"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed(&[
            entry("http://arxiv.org/abs/2401.00001v1", "Shared Paper First Copy"),
            entry("http://arxiv.org/abs/2401.00002v1", "Unique Neuro Paper"),
        ])))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("search_query", "ti:cardiology"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed(&[
            entry("http://arxiv.org/abs/2401.00001v1", "Shared Paper Second Copy"),
            entry("http://arxiv.org/abs/2401.00003v1", "Unique Cardio Paper"),
        ])))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed(&[])))
        .mount(&server)
        .await;

    let fetcher = ArxivFetcher::with_base_url(&server.uri(), 5).unwrap();
    let papers = fetcher.fetch_all().await;

    assert_eq!(papers.len(), 3);
    let shared: Vec<_> = papers
        .iter()
        .filter(|p| p.id == "http://arxiv.org/abs/2401.00001v1")
        .collect();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].title, "Shared Paper First Copy");
}

#[tokio::test]
async fn unparseable_body_counts_as_failed_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<feed><entry>broken</feed>"))
        .mount(&server)
        .await;

    let fetcher = ArxivFetcher::with_base_url(&server.uri(), 5).unwrap();
    let papers = fetcher.fetch_all().await;

    assert!(papers.is_empty());
}
