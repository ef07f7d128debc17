//! Works pagination against a mocked OpenAlex API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use author_profile::analysis::fetch_author_works;
use author_profile::client::{OpenAlexClient, WorksSource};
use author_profile::config::Config;
use author_profile::error::{ClientError, ClientResult, ProfileError, UPSTREAM_MESSAGE_LIMIT};
use author_profile::models::{Author, AuthorId, PageMeta, Work, WorksPage};
use author_profile::service::ProfileService;

const FILTER: &str = "authorships.author.id:https://openalex.org/A1";

fn setup_client(mock_server: &MockServer) -> OpenAlexClient {
    OpenAlexClient::new(&Config::for_testing(&mock_server.uri())).unwrap()
}

fn work_json(id: &str, year: i32, citations: i64) -> serde_json::Value {
    json!({
        "id": format!("https://openalex.org/{id}"),
        "doi": format!("https://doi.org/10.1000/{id}"),
        "title": format!("Work {id}"),
        "publication_year": year,
        "cited_by_count": citations,
        "type": "article",
        "authorships": [],
        "primary_location": {"source": {"display_name": "Journal"}}
    })
}

fn page_json(works: Vec<serde_json::Value>, next_cursor: Option<&str>) -> serde_json::Value {
    json!({
        "meta": {"count": works.len(), "next_cursor": next_cursor},
        "results": works
    })
}

#[tokio::test]
async fn test_follows_cursor_until_exhausted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("filter", FILTER))
        .and(query_param("cursor", "*"))
        .and(query_param("per-page", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![work_json("W1", 2020, 10), work_json("W2", 2021, 5)],
            Some("page-2"),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("cursor", "page-2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(vec![work_json("W3", 2022, 1)], None)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let author = AuthorId::parse("A1").unwrap();

    let fetched = fetch_author_works(&client, &author, 200, 15_000).await.unwrap();

    assert_eq!(fetched.works.len(), 3);
    assert_eq!(fetched.pages, 2);
    assert!(!fetched.truncated);
    assert_eq!(fetched.works[2].id.as_deref(), Some("https://openalex.org/W3"));
}

#[tokio::test]
async fn test_bare_and_full_ids_use_same_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("filter", FILTER))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(vec![work_json("W1", 2020, 3)], None)),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);

    for raw in ["A1", "https://openalex.org/A1"] {
        let author = AuthorId::parse(raw).unwrap();
        let fetched = fetch_author_works(&client, &author, 200, 15_000).await.unwrap();
        assert_eq!(fetched.works.len(), 1);
    }
}

#[tokio::test]
async fn test_empty_snapshot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meta": {}, "results": []})))
        .mount(&mock_server)
        .await;

    let service = ProfileService::from_config(&Config::for_testing(&mock_server.uri())).unwrap();
    let report = service.ranking("A1").await.unwrap();

    assert_eq!(report.count_works_total, 0);
    assert_eq!(report.count_works_with_year, 0);
    assert!(report.paper_ranking.items.is_empty());
    assert!(report.coauthor_ranking.items.is_empty());
    assert_eq!(report.coauthor_ranking.counted_article_works, 0);
}

#[tokio::test]
async fn test_upstream_error_aborts_fetch() {
    let mock_server = MockServer::start().await;
    let long_body = "x".repeat(1000);

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("cursor", "*"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(vec![work_json("W1", 2020, 3)], Some("c2"))),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("cursor", "c2"))
        .respond_with(ResponseTemplate::new(500).set_body_string(long_body))
        .mount(&mock_server)
        .await;

    let service = ProfileService::from_config(&Config::for_testing(&mock_server.uri())).unwrap();
    let err = service.ranking("A1").await.unwrap_err();

    match err {
        ProfileError::Upstream(ClientError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message.chars().count(), UPSTREAM_MESSAGE_LIMIT);
        }
        other => panic!("expected upstream status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let service = ProfileService::from_config(&Config::for_testing(&mock_server.uri())).unwrap();
    let err = service.ranking("A1").await.unwrap_err();

    assert!(err.is_upstream());
    assert!(matches!(err, ProfileError::Upstream(ClientError::Parse(_))));
}

#[tokio::test]
async fn test_slow_page_is_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(vec![work_json("W1", 2020, 3)], None))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = Config::for_testing(&mock_server.uri());
    config.works_timeout = Duration::from_millis(300);
    let service = ProfileService::from_config(&config).unwrap();

    let err = service.ranking("A1").await.unwrap_err();

    assert!(matches!(err, ProfileError::Upstream(ClientError::Timeout(after)) if after == Duration::from_millis(300)));
    assert!(err.to_user_message().starts_with("OpenAlex did not answer within"));
}

#[tokio::test]
async fn test_mailto_sent_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("mailto", "me@example.org"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = Config::for_testing(&mock_server.uri());
    config.mailto = Some("me@example.org".to_string());
    let client = OpenAlexClient::new(&config).unwrap();
    let author = AuthorId::parse("A1").unwrap();

    let fetched = fetch_author_works(&client, &author, 200, 15_000).await.unwrap();
    assert!(fetched.works.is_empty());
}

/// Source that never runs out of pages.
struct EndlessSource {
    pages: AtomicUsize,
}

#[async_trait::async_trait]
impl WorksSource for EndlessSource {
    async fn works_page(&self, _filter: &str, _cursor: &str, per_page: u32) -> ClientResult<WorksPage> {
        let n = self.pages.fetch_add(1, Ordering::SeqCst);
        let results = (0..per_page)
            .map(|i| Work {
                id: Some(format!("https://openalex.org/W{n}-{i}")),
                publication_year: Some(2020),
                ..Default::default()
            })
            .collect();
        Ok(WorksPage {
            meta: Some(PageMeta { count: None, next_cursor: Some(format!("c{}", n + 1)) }),
            results: Some(results),
        })
    }

    async fn most_cited_works(&self, _author: &AuthorId, _limit: u32) -> ClientResult<Vec<Work>> {
        Ok(Vec::new())
    }

    async fn search_authors(&self, _name: &str, _per_page: u32) -> ClientResult<Vec<Author>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_fetch_cap_truncates_without_error() {
    let source = EndlessSource { pages: AtomicUsize::new(0) };
    let author = AuthorId::parse("A1").unwrap();

    let fetched = fetch_author_works(&source, &author, 200, 15_000).await.unwrap();

    assert!(fetched.truncated);
    assert!(fetched.works.len() > 15_000);
    assert_eq!(fetched.works.len(), 15_200);
    assert_eq!(fetched.pages, 76);
}
