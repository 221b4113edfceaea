//! CRM mock: a fixed catalogue of pipeline opportunities.
//!
//! Mirrors the shape of an Odoo `crm.lead` search without talking to any
//! Odoo instance. Items come pre-sorted by win probability, descending,
//! which is the order the real search would return.

use adjutant_core::PriorityItem;
use tracing::info;

fn priority_catalogue() -> Vec<PriorityItem> {
    vec![
        PriorityItem {
            lead_id: 101,
            name: "Acme Corp renewal".to_string(),
            stage: "Negotiation".to_string(),
            probability: 0.8,
            deadline: Some("2026-08-21".to_string()),
            expected_revenue: 48_000.0,
            activity_summary: Some("Send revised quote".to_string()),
            owner_id: Some(7),
        },
        PriorityItem {
            lead_id: 102,
            name: "Davis Group expansion".to_string(),
            stage: "Proposition".to_string(),
            probability: 0.6,
            deadline: Some("2026-09-04".to_string()),
            expected_revenue: 125_000.0,
            activity_summary: Some("Review contract redlines".to_string()),
            owner_id: Some(7),
        },
        PriorityItem {
            lead_id: 103,
            name: "Northwind pilot".to_string(),
            stage: "Qualified".to_string(),
            probability: 0.35,
            deadline: None,
            expected_revenue: 30_000.0,
            activity_summary: Some("Schedule discovery call".to_string()),
            owner_id: Some(12),
        },
        PriorityItem {
            lead_id: 104,
            name: "Globex tooling add-on".to_string(),
            stage: "Qualified".to_string(),
            probability: 0.2,
            deadline: Some("2026-10-15".to_string()),
            expected_revenue: 12_500.0,
            activity_summary: None,
            owner_id: None,
        },
    ]
}

/// Searches the mock pipeline.
///
/// `stages` filters by stage label when given; `limit` caps the result.
pub fn search_priority_items(limit: usize, stages: Option<&[String]>) -> Vec<PriorityItem> {
    info!("Serving mock priority items (limit: {limit})");
    let mut items: Vec<PriorityItem> = priority_catalogue()
        .into_iter()
        .filter(|item| match stages {
            Some(stages) => stages.iter().any(|s| s == &item.stage),
            None => true,
        })
        .collect();
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_come_sorted_by_probability() {
        let items = search_priority_items(10, None);
        assert_eq!(items.len(), 4);
        assert!(items.windows(2).all(|w| w[0].probability >= w[1].probability));
    }

    #[test]
    fn limit_caps_the_result() {
        assert_eq!(search_priority_items(2, None).len(), 2);
        assert!(search_priority_items(0, None).is_empty());
    }

    #[test]
    fn stage_filter_applies() {
        let stages = vec!["Qualified".to_string()];
        let items = search_priority_items(10, Some(&stages));
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.stage == "Qualified"));
    }

    #[test]
    fn unknown_stage_matches_nothing() {
        let stages = vec!["Won".to_string()];
        assert!(search_priority_items(10, Some(&stages)).is_empty());
    }
}
