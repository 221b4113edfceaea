#![allow(dead_code)]

use std::sync::Arc;

use adjutant_config::Settings;
use adjutant_server::{build_router, AppState};
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;

/// Builds the gateway with default settings, ready for `oneshot`.
pub fn app() -> Router {
    let settings = Settings::from_env().expect("default settings always parse");
    build_router(Arc::new(AppState::new(settings)))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// POST with full control over content type, for malformed-body cases.
pub fn raw_post(uri: &str, content_type: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
