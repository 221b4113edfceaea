//! Week-plan HTTP handler.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use adjutant_core::build_week_plan;

use crate::dto::{WeekPlanRequest, WeekPlanResponse};
use crate::extract::ValidJson;
use crate::state::AppState;

/// Generates a mock week plan, one item per goal.
pub async fn week_plan(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<WeekPlanRequest>,
) -> Json<WeekPlanResponse> {
    let planner = &state.settings.planner;
    let focus_min = req
        .preferences
        .focus_blocks_min
        .unwrap_or(planner.focus_block_min);

    info!("Generating mock week plan for {} goals", req.goals.len());

    let plan = build_week_plan(&req.goals, &planner.owner, focus_min);
    Json(WeekPlanResponse { plan })
}
