mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::util::ServiceExt;

const SEARCH: &str = "/v1/odoo/priority-items/search";

#[tokio::test]
async fn priority_search_works_without_a_body() {
    let response = common::app()
        .oneshot(common::raw_post(SEARCH, None, ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["lead_id"], 101);
}

#[tokio::test]
async fn priority_search_honors_limit() {
    let response = common::app()
        .oneshot(common::json_post(SEARCH, json!({"limit": 2})))
        .await
        .unwrap();

    let body = common::body_json(response).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn priority_search_filters_by_stage() {
    let response = common::app()
        .oneshot(common::json_post(SEARCH, json!({"stages": ["Qualified"]})))
        .await
        .unwrap();

    let body = common::body_json(response).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i["stage"] == "Qualified"));
}

#[tokio::test]
async fn window_and_owner_filters_are_accepted_but_not_applied() {
    let response = common::app()
        .oneshot(common::json_post(
            SEARCH,
            json!({"days_ahead": 7, "owner_id": 99}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn debug_reports_a_healthy_mock() {
    let response = common::app()
        .oneshot(common::get("/v1/odoo/debug"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["phase"], "done");
}
