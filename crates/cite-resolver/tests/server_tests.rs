//! HTTP endpoint tests using axum's Router directly.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cite_resolver::CitationResolver;
use cite_resolver::config::Config;
use cite_resolver::server::create_router;

fn build_test_router(base_url: &str) -> axum::Router {
    let resolver = CitationResolver::new(&Config::for_testing(base_url)).unwrap();
    create_router(Arc::new(resolver))
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app.oneshot(Request::get(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health() {
    let app = build_test_router("http://unused.localhost");
    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "cite-resolver");
}

#[tokio::test]
async fn test_cite_title_query() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/publ/api"))
        .and(query_param("q", "Attention is all you need"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            include_str!("fixtures/dblp_search.json"),
            "application/json",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = build_test_router(&mock_server.uri());
    let (status, body) = get_json(app, "/api/cite?q=Attention%20is%20all%20you%20need").await;

    assert_eq!(status, StatusCode::OK);
    let candidates = body["candidates"].as_array().unwrap();
    assert_eq!(candidates.len(), 4);
    assert_eq!(candidates[0]["venue"], "NIPS");
    assert_eq!(candidates[0]["is_arxiv"], false);
    assert_eq!(candidates[1]["venue"], "arXiv");
}

#[tokio::test]
async fn test_cite_source_down_returns_empty_list() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/publ/api"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let app = build_test_router(&mock_server.uri());
    let (status, body) = get_json(app, "/api/cite?q=Deep%20Learning").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"candidates": []}));
}

#[tokio::test]
async fn test_cite_missing_query() {
    let app = build_test_router("http://unused.localhost");

    let (status, body) = get_json(app.clone(), "/api/cite").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Malformed query"));

    let (status, _) = get_json(app, "/api/cite?q=%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
