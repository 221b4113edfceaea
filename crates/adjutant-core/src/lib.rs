//! Core domain types for the adjutant mock gateway.
//!
//! This crate provides the shapes shared across the adjutant workspace:
//!
//! - [`PlanItem`], [`Subtask`], [`SuggestedSlot`] — week-plan entries
//! - [`Priority`] and [`ItemStatus`] — plan item classification
//! - [`ThreadSummary`] — inbox thread summaries served by the Gmail mock
//! - [`PriorityItem`] — pipeline items served by the CRM mock
//! - [`build_week_plan`] — deterministic week-plan assembly
//!
//! # Example
//!
//! ```rust
//! use adjutant_core::{build_week_plan, Priority};
//!
//! let goals = vec!["Close the Acme deal".to_string()];
//! let plan = build_week_plan(&goals, "chief-of-staff", 90);
//!
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan[0].priority, Priority::P1);
//! assert_eq!(plan[0].subtasks.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Timezone stamped onto suggested focus slots.
pub const PLAN_TIMEZONE: &str = "America/Mexico_City";

/// Maximum length of a plan item title; longer goals are truncated.
pub const TITLE_MAX_CHARS: usize = 120;

/// How many leading plan items are considered top priority.
const P1_CUTOFF: usize = 3;

/// Priority band of a plan item.
///
/// The first [`P1_CUTOFF`] items of a plan are `P1`, the rest `P2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Must happen this week.
    P1,
    /// Important but deferrable.
    P2,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P1 => write!(f, "P1"),
            Self::P2 => write!(f, "P2"),
        }
    }
}

/// Lifecycle state of a plan item or subtask.
///
/// The gateway never advances state, so `Open` is the only variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Not started.
    Open,
}

/// A single entry in a generated week plan.
///
/// One item is produced per input goal; ids are `task_001`, `task_002`, ...
/// in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanItem {
    /// Stable identifier within the plan (`task_NNN`).
    pub id: String,
    /// The goal text, trimmed and truncated to [`TITLE_MAX_CHARS`].
    pub title: String,
    /// Who the item is assigned to.
    pub owner: String,
    /// Priority band derived from input position.
    pub priority: Priority,
    /// Set to `RevenueCritical` when the goal looks deal-related.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    /// Focus minutes budgeted for the item.
    pub effort_min: u32,
    /// Deadline offset from plan creation, in days.
    pub due_in_days: u32,
    /// Always [`ItemStatus::Open`].
    pub status: ItemStatus,
    /// Scope / draft / review breakdown of the item.
    pub subtasks: Vec<Subtask>,
    /// Suggested focus slot for the item.
    pub suggested_slot: SuggestedSlot,
}

/// A fixed-template subtask of a [`PlanItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    /// `<task id>_<1..3>`.
    pub id: String,
    pub title: String,
    /// Share of the parent's focus block, in minutes.
    pub estimate_min: u32,
    pub status: ItemStatus,
}

/// A suggested focus slot, expressed as offsets so that identical input
/// always yields an identical plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedSlot {
    /// Hours from plan creation to the start of the slot.
    pub starts_in_hours: u32,
    /// Slot length in minutes.
    pub duration_min: u32,
    /// Always [`PLAN_TIMEZONE`].
    pub timezone: String,
}

/// Summary of one inbox thread, as served by the Gmail mock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadSummary {
    #[serde(rename = "threadId")]
    pub thread_id: String,
    pub subject: String,
    pub from: String,
    /// First line of the latest message.
    pub snippet: String,
    /// `true` when the snippet reads like an open question.
    pub action_needed: bool,
    /// Reserved for a future reply drafter; always `None` in the mock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_reply: Option<String>,
}

impl ThreadSummary {
    /// Builds a summary, deriving `action_needed` from the snippet.
    pub fn new(
        thread_id: impl Into<String>,
        subject: impl Into<String>,
        from: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        let snippet = snippet.into();
        let action_needed = snippet.contains('?');
        Self {
            thread_id: thread_id.into(),
            subject: subject.into(),
            from: from.into(),
            snippet,
            action_needed,
            suggested_reply: None,
        }
    }
}

/// A CRM pipeline item, as served by the priority-items mock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityItem {
    pub lead_id: u32,
    pub name: String,
    /// Pipeline stage label (`Qualified`, `Proposition`, ...).
    pub stage: String,
    /// Win probability in `0.0..=1.0`.
    pub probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub expected_revenue: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u32>,
}

// ============================================================================
// Week-plan assembly
// ============================================================================

/// Builds a week plan from a list of goals.
///
/// The assembly is a pure function of its arguments: one [`PlanItem`] per
/// goal, `P1` for the first three, deadlines and slots expressed as offsets.
/// Calling it twice with the same input produces the same plan.
pub fn build_week_plan(goals: &[String], owner: &str, focus_block_min: u32) -> Vec<PlanItem> {
    goals
        .iter()
        .enumerate()
        .map(|(idx, goal)| plan_item(idx, goal, owner, focus_block_min))
        .collect()
}

fn plan_item(idx: usize, goal: &str, owner: &str, focus_block_min: u32) -> PlanItem {
    let ordinal = idx + 1;
    let id = format!("task_{ordinal:03}");
    let title: String = goal.trim().chars().take(TITLE_MAX_CHARS).collect();

    let lowered = goal.to_lowercase();
    let impact = (lowered.contains("close") || lowered.contains("deal"))
        .then(|| "RevenueCritical".to_string());

    let priority = if ordinal <= P1_CUTOFF { Priority::P1 } else { Priority::P2 };
    let subtasks = subtasks_for(&id, focus_block_min);

    PlanItem {
        id,
        title,
        owner: owner.to_string(),
        priority,
        impact,
        effort_min: focus_block_min,
        due_in_days: (3 + ordinal) as u32,
        status: ItemStatus::Open,
        subtasks,
        suggested_slot: SuggestedSlot {
            starts_in_hours: (idx * 2) as u32,
            duration_min: focus_block_min,
            timezone: PLAN_TIMEZONE.to_string(),
        },
    }
}

/// The fixed 30/50/20 scope / draft / review split.
fn subtasks_for(task_id: &str, focus_block_min: u32) -> Vec<Subtask> {
    const TEMPLATE: [(&str, u32); 3] = [
        ("Define scope", 3),
        ("Draft first pass", 5),
        ("Review & finalize", 2),
    ];

    TEMPLATE
        .iter()
        .enumerate()
        .map(|(i, &(title, tenths))| Subtask {
            id: format!("{task_id}_{}", i + 1),
            title: title.to_string(),
            estimate_min: focus_block_min * tenths / 10,
            status: ItemStatus::Open,
        })
        .collect()
}
