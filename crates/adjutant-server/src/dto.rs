//! Data transfer objects for HTTP message serialization.

use adjutant_core::{PlanItem, PriorityItem, ThreadSummary};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// === Health ===

/// Response from the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// === Planner ===

/// Request to generate a week plan.
#[derive(Debug, Deserialize)]
pub struct WeekPlanRequest {
    /// Goals to plan for; an empty list yields an empty plan.
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub preferences: PlanPreferences,
}

/// Optional planning knobs.
#[derive(Debug, Default, Deserialize)]
pub struct PlanPreferences {
    /// Focus block length in minutes; falls back to the configured default.
    #[serde(default)]
    pub focus_blocks_min: Option<u32>,
}

/// Response carrying the generated plan.
#[derive(Debug, Serialize)]
pub struct WeekPlanResponse {
    pub plan: Vec<PlanItem>,
}

// === Gmail ===

/// Request to summarize the inbox. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeInboxRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub max_threads: Option<usize>,
}

/// Response with the mock inbox summary.
#[derive(Debug, Serialize)]
pub struct SummarizeInboxResponse {
    pub summary: String,
    pub threads: Vec<ThreadSummary>,
}

/// Request to list inbox threads. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ThreadListRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Response with the mock thread listing.
#[derive(Debug, Serialize)]
pub struct ThreadListResponse {
    pub threads: Vec<ThreadSummary>,
}

/// Request to compose and send an email.
#[derive(Debug, Deserialize)]
pub struct ComposeAndSendRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Acknowledgment for a mock send. No email leaves the building.
#[derive(Debug, Serialize)]
pub struct ComposeAndSendResponse {
    pub status: &'static str,
    /// Stable across identical requests.
    pub message_id: Uuid,
}

/// Request to create a draft.
#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub thread_id: Option<String>,
}

/// Acknowledgment for a mock draft.
#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub status: &'static str,
    pub draft_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
}

// === Calendar ===

/// Request to block time on the calendar.
///
/// `start` and `end` are opaque strings here; the mock does not check
/// temporal ordering.
#[derive(Debug, Deserialize)]
pub struct BlockTimeRequest {
    pub title: String,
    pub start: String,
    pub end: String,
}

/// Acknowledgment for a mock calendar block.
#[derive(Debug, Serialize)]
pub struct BlockTimeResponse {
    pub status: &'static str,
    pub event_id: Uuid,
}

// === CRM (Odoo) ===

/// Request to search priority pipeline items. Every field is optional;
/// `days_ahead` and `owner_id` are accepted but not applied, matching the
/// upstream behavior this endpoint mocks.
#[derive(Debug, Default, Deserialize)]
pub struct PrioritySearchRequest {
    #[serde(default)]
    pub days_ahead: Option<u32>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub stages: Option<Vec<String>>,
    #[serde(default)]
    pub owner_id: Option<u32>,
}

/// Response with the mock pipeline items.
#[derive(Debug, Serialize)]
pub struct PrioritySearchResponse {
    pub items: Vec<PriorityItem>,
}
