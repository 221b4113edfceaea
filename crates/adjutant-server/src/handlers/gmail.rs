//! Gmail mock HTTP handlers.
//!
//! None of these touch a mailbox: listing serves a fixed catalogue, and
//! sending/drafting acknowledge without side effects.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::{
    ComposeAndSendRequest, ComposeAndSendResponse, DraftRequest, DraftResponse,
    SummarizeInboxRequest, SummarizeInboxResponse, ThreadListRequest, ThreadListResponse,
};
use crate::error::AppError;
use crate::extract::ValidJson;
use crate::services::{gmail, mock_id};
use crate::state::AppState;

/// Summarizes the mock inbox. The body is optional.
pub async fn summarize_inbox(
    State(state): State<Arc<AppState>>,
    body: Option<ValidJson<SummarizeInboxRequest>>,
) -> Json<SummarizeInboxResponse> {
    let req = body.map(|ValidJson(r)| r).unwrap_or_default();
    let defaults = &state.settings.gmail;

    let query = req.query.as_deref().unwrap_or(&defaults.default_query);
    let max_threads = req.max_threads.unwrap_or(defaults.default_max_threads);

    let threads = gmail::list_threads(query, max_threads);
    let summary = gmail::summarize(&threads);
    Json(SummarizeInboxResponse { summary, threads })
}

/// Lists mock inbox threads. The body is optional.
pub async fn thread_list(
    State(state): State<Arc<AppState>>,
    body: Option<ValidJson<ThreadListRequest>>,
) -> Json<ThreadListResponse> {
    let req = body.map(|ValidJson(r)| r).unwrap_or_default();
    let defaults = &state.settings.gmail;

    let query = req.query.as_deref().unwrap_or(&defaults.default_query);
    let limit = req.limit.unwrap_or(defaults.default_max_threads);

    Json(ThreadListResponse { threads: gmail::list_threads(query, limit) })
}

/// Acknowledges a send without sending anything.
pub async fn compose_and_send(
    ValidJson(req): ValidJson<ComposeAndSendRequest>,
) -> Result<Json<ComposeAndSendResponse>, AppError> {
    if req.recipient.is_empty() {
        return Err(AppError::Validation("'recipient' must not be empty".to_string()));
    }

    info!("Mock-sending email to {} ({})", req.recipient, req.subject);

    let message_id = mock_id(&[&req.recipient, &req.subject, &req.body]);
    Ok(Json(ComposeAndSendResponse { status: "mock-sent", message_id }))
}

/// Acknowledges a draft without creating one.
pub async fn draft(
    ValidJson(req): ValidJson<DraftRequest>,
) -> Result<Json<DraftResponse>, AppError> {
    if req.recipient.is_empty() {
        return Err(AppError::Validation("'recipient' must not be empty".to_string()));
    }

    info!("Mock-drafting email to {} ({})", req.recipient, req.subject);

    let draft_id = mock_id(&[
        &req.recipient,
        &req.subject,
        &req.body,
        req.thread_id.as_deref().unwrap_or(""),
    ]);
    Ok(Json(DraftResponse {
        status: "mock-draft-created",
        draft_id,
        thread_id: req.thread_id,
    }))
}
