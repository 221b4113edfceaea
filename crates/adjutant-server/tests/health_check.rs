mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::util::ServiceExt;

#[tokio::test]
async fn health_returns_ok() {
    let response = common::app()
        .oneshot(common::get("/v1/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn health_ignores_query_parameters() {
    let response = common::app()
        .oneshot(common::get("/v1/health?verbose=1&user=me"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn unknown_routes_return_structured_404() {
    let response = common::app()
        .oneshot(common::get("/v1/does-not-exist"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("/v1/does-not-exist"));
}
