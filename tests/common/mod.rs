#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

/// Router over a throwaway SQLite file; the file is removed on drop.
pub struct TestApp {
    pub app: Router,
    pub storage: trivia_api::db::TriviaStorage,
    path: PathBuf,
}

impl TestApp {
    pub async fn spawn(label: &str, seed: bool) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "trivia-{label}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let database_url = format!("sqlite:{}", path.display());
        let storage = trivia_api::db::spawn(&database_url)
            .await
            .expect("failed to open test database");
        if seed {
            storage.seed_defaults().await.expect("failed to seed");
        }

        let state = trivia_api::TriviaState::new(storage.clone());
        let app = trivia_api::trivia_router(state);
        Self { app, storage, path }
    }

    pub async fn seeded(label: &str) -> Self {
        Self::spawn(label, true).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().method("GET").uri(uri).body(Body::empty()))
            .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty()),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body)),
        )
        .await
    }

    async fn send(&self, req: Result<Request<Body>, axum::http::Error>) -> (StatusCode, Value) {
        let resp = self
            .app
            .clone()
            .oneshot(req.expect("failed to build request"))
            .await
            .expect("request failed");
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).expect("response body was not json")
        };
        (status, value)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub fn assert_not_found(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
    assert_eq!(body["message"], "resource not found");
}
