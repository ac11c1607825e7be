use serde::{Deserialize, Serialize};

/// A titled time interval held by the store.
///
/// Dates are kept exactly as the caller supplied them; comparisons go through
/// [`crate::date::normalize`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
}

/// One page of a date-range listing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventPage {
    /// Number of events in this page, not in the whole filtered set.
    pub total_count: usize,
    pub events: Vec<Event>,
}
