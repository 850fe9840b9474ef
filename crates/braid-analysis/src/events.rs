//! Event listing - the flat orderings used by report views

use braid_domain::Event;

use crate::error::ParseSortError;

/// Ordering applied to the flat event list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventSort {
    /// Oldest first (the default)
    #[default]
    DateAsc,
    /// Newest first
    DateDesc,
    /// Critical > high > medium > low; ties keep date order as received
    Priority,
}

impl EventSort {
    /// Get the sort key name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EventSort::DateAsc => "date-asc",
            EventSort::DateDesc => "date-desc",
            EventSort::Priority => "priority",
        }
    }
}

impl std::str::FromStr for EventSort {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date-asc" => Ok(EventSort::DateAsc),
            "date-desc" => Ok(EventSort::DateDesc),
            "priority" => Ok(EventSort::Priority),
            other => Err(ParseSortError(other.to_string())),
        }
    }
}

/// Sort the event list without mutating the input
///
/// All three orderings are stable, so ties retain input order.
pub fn sort_events(events: &[Event], sort: EventSort) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    match sort {
        EventSort::DateAsc => sorted.sort_by_key(|e| e.event_date),
        EventSort::DateDesc => sorted.sort_by_key(|e| std::cmp::Reverse(e.event_date)),
        EventSort::Priority => sorted.sort_by_key(|e| e.priority.rank()),
    }
    sorted
}
