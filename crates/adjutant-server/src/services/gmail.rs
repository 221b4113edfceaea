//! Gmail mock: a fixed catalogue of inbox threads.
//!
//! No Gmail API is called anywhere in this module. The catalogue is the
//! same on every request, which keeps the summarize and thread-list
//! endpoints idempotent.

use adjutant_core::ThreadSummary;
use tracing::info;

/// The full mock inbox, most recent first.
fn thread_catalogue() -> Vec<ThreadSummary> {
    vec![
        ThreadSummary::new(
            "thread_001",
            "Re: Q3 renewal pricing",
            "maria@acme.example",
            "Can you confirm the renewal pricing by Friday?",
        ),
        ThreadSummary::new(
            "thread_002",
            "Invoice #4417 approval",
            "billing@vendorco.example",
            "The invoice is ready for your approval.",
        ),
        ThreadSummary::new(
            "thread_003",
            "Intro: Northwind partnership",
            "jordan@northwind.example",
            "Would next Tuesday work for a quick call?",
        ),
        ThreadSummary::new(
            "thread_004",
            "Weekly metrics digest",
            "reports@internal.example",
            "Open rate is up 4% week over week.",
        ),
        ThreadSummary::new(
            "thread_005",
            "Follow-up on the Davis deal",
            "sam@davisgroup.example",
            "Any update on the contract redlines?",
        ),
    ]
}

/// Lists mock threads for a query, capped at `limit`.
///
/// The query is logged but does not filter the catalogue; the mock serves
/// the same threads for any query.
pub fn list_threads(query: &str, limit: usize) -> Vec<ThreadSummary> {
    info!("Serving mock thread list (query: {query})");
    let mut threads = thread_catalogue();
    threads.truncate(limit);
    threads
}

/// One-line summary of a thread listing.
pub fn summarize(threads: &[ThreadSummary]) -> String {
    let action_needed = threads.iter().filter(|t| t.action_needed).count();
    format!(
        "{} threads match the inbox query; {} look like they need a reply.",
        threads.len(),
        action_needed
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_caps_the_listing() {
        assert_eq!(list_threads("in:inbox", 2).len(), 2);
        assert_eq!(list_threads("in:inbox", 100).len(), 5);
        assert!(list_threads("in:inbox", 0).is_empty());
    }

    #[test]
    fn listing_ignores_the_query_text() {
        assert_eq!(list_threads("in:inbox", 10), list_threads("from:nobody", 10));
    }

    #[test]
    fn summary_counts_open_questions() {
        let threads = list_threads("in:inbox", 10);
        let summary = summarize(&threads);
        assert_eq!(summary, "5 threads match the inbox query; 3 look like they need a reply.");
    }

    #[test]
    fn empty_listing_summarizes_cleanly() {
        assert_eq!(
            summarize(&[]),
            "0 threads match the inbox query; 0 look like they need a reply."
        );
    }
}
