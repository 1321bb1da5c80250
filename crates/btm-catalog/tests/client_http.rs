//! Catalog client behavior against a mock ExerciseDB server.

use btm_catalog::{CatalogClient, CatalogSource, FetchError, PageMode};
use btm_config::CatalogConfig;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "test-key-123";

fn config(server: &MockServer, page_size: u32) -> CatalogConfig {
    CatalogConfig {
        api_key: KEY.into(),
        base_url: server.uri(),
        host: "exercisedb.p.rapidapi.com".into(),
        page_size,
        max_pages: 10,
        timeout_secs: 5,
    }
}

fn exercises(names: &[&str]) -> serde_json::Value {
    json!(
        names
            .iter()
            .map(|n| json!({"name": n, "bodyPart": "upper legs", "equipment": "body weight"}))
            .collect::<Vec<_>>()
    )
}

async fn mount_page(server: &MockServer, limit: &str, offset: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/exercises"))
        .and(query_param("limit", limit))
        .and(query_param("offset", offset))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn pages_are_concatenated_until_an_empty_page() {
    let server = MockServer::start().await;
    mount_page(&server, "2", "0", exercises(&["squat", "lunge"])).await;
    mount_page(&server, "2", "2", exercises(&["step up"])).await;
    mount_page(&server, "2", "3", json!([])).await;

    let client = CatalogClient::new(&config(&server, 2)).unwrap();
    let records = client.fetch_all().await.unwrap();

    let names: Vec<_> = records
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["squat", "lunge", "step up"]);
}

#[tokio::test]
async fn sends_rapidapi_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exercises"))
        .and(header("X-RapidAPI-Key", KEY))
        .and(header("X-RapidAPI-Host", "exercisedb.p.rapidapi.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exercises(&["squat"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&config(&server, 0)).unwrap();
    assert_eq!(client.page_mode(), PageMode::Unbounded);
    assert_eq!(client.fetch_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unbounded_mode_makes_a_single_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exercises"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exercises(&["a", "b", "c"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&config(&server, 200))
        .unwrap()
        .with_page_mode(PageMode::Unbounded);
    assert_eq!(client.fetch_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn unauthorized_is_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exercises"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&config(&server, 200)).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus { status: 401, .. }));
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn rate_limit_is_http_status_429() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exercises"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&config(&server, 200)).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    assert_eq!(err.status(), Some(429));
}

#[tokio::test]
async fn failure_on_a_later_page_fails_the_whole_fetch() {
    let server = MockServer::start().await;
    mount_page(&server, "2", "0", exercises(&["squat", "lunge"])).await;
    Mock::given(method("GET"))
        .and(path("/exercises"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&config(&server, 2)).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn html_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exercises"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&config(&server, 0)).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    assert!(matches!(err, FetchError::MalformedBody(_)));
}

#[tokio::test]
async fn object_body_is_unexpected_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exercises"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "not subscribed"})),
        )
        .mount(&server)
        .await;

    let client = CatalogClient::new(&config(&server, 0)).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    assert!(matches!(err, FetchError::UnexpectedShape(_)));
}

#[tokio::test]
async fn runaway_paging_hits_the_page_cap() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exercises"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exercises(&["same"])))
        .mount(&server)
        .await;

    let mut cfg = config(&server, 1);
    cfg.max_pages = 3;
    let client = CatalogClient::new(&cfg).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    assert!(matches!(err, FetchError::UnexpectedShape(msg) if msg.contains("3 pages")));
}

#[tokio::test]
async fn unreachable_server_is_transport() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let cfg = CatalogConfig {
        api_key: KEY.into(),
        base_url: format!("http://{addr}"),
        page_size: 0,
        timeout_secs: 5,
        ..Default::default()
    };
    let client = CatalogClient::new(&cfg).unwrap();
    let err = CatalogSource::fetch_all(&client).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}
