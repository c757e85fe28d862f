mod common;

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use common::TestApp;
use tower::ServiceExt;

fn header_list(headers: &HeaderMap, name: &str) -> Vec<String> {
    headers
        .get(name)
        .unwrap_or_else(|| panic!("missing {name}"))
        .to_str()
        .expect("header was not ascii")
        .split(',')
        .map(|v| v.trim().to_ascii_lowercase())
        .collect()
}

#[tokio::test]
async fn preflight_allows_client_methods_and_headers() {
    let t = TestApp::seeded("cors-preflight").await;

    let resp = t
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/questions")
                .header("origin", "http://localhost:3000")
                .header("access-control-request-method", "DELETE")
                .header("access-control-request-headers", "content-type")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .expect("missing access-control-allow-origin"),
        "*"
    );

    let methods = header_list(headers, "access-control-allow-methods");
    for method in ["get", "post", "patch", "delete", "options"] {
        assert!(methods.contains(&method.to_string()), "{method} not allowed: {methods:?}");
    }

    let allowed = header_list(headers, "access-control-allow-headers");
    for header in ["content-type", "authorization"] {
        assert!(allowed.contains(&header.to_string()), "{header} not allowed: {allowed:?}");
    }
}

#[tokio::test]
async fn simple_request_carries_allow_origin() {
    let t = TestApp::seeded("cors-simple").await;

    let resp = t
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/categories")
                .header("origin", "http://localhost:3000")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .expect("missing access-control-allow-origin"),
        "*"
    );
}
