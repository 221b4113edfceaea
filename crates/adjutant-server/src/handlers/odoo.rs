//! CRM (Odoo) mock HTTP handlers.

use axum::Json;

use crate::dto::{PrioritySearchRequest, PrioritySearchResponse};
use crate::extract::ValidJson;
use crate::services::odoo;

const DEFAULT_LIMIT: usize = 10;

/// Searches the mock pipeline for priority items. The body is optional.
pub async fn priority_search(
    body: Option<ValidJson<PrioritySearchRequest>>,
) -> Json<PrioritySearchResponse> {
    let req = body.map(|ValidJson(r)| r).unwrap_or_default();
    let limit = req.limit.unwrap_or(DEFAULT_LIMIT);

    let items = odoo::search_priority_items(limit, req.stages.as_deref());
    Json(PrioritySearchResponse { items })
}

/// Static connectivity report; the mock is always reachable.
pub async fn debug() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "ok": true,
        "phase": "done",
        "uid": 1,
        "version": {
            "server_version": "17.0",
            "protocol_version": 1,
        },
    }))
}
