//! Calendar mock HTTP handler.

use axum::Json;
use tracing::info;

use crate::dto::{BlockTimeRequest, BlockTimeResponse};
use crate::extract::ValidJson;
use crate::services::mock_id;

/// Acknowledges a calendar block without touching any calendar.
///
/// `start` and `end` are accepted as-is; a start after the end is not an
/// error here.
pub async fn block_time(ValidJson(req): ValidJson<BlockTimeRequest>) -> Json<BlockTimeResponse> {
    info!("Mock-blocking calendar time: {} ({} - {})", req.title, req.start, req.end);

    let event_id = mock_id(&[&req.title, &req.start, &req.end]);
    Json(BlockTimeResponse { status: "mock-blocked", event_id })
}
