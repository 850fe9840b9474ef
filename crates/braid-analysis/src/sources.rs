//! Source aggregation - per-outlet grouping and statistics

use braid_domain::{clamp_score, Event, Source};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::error::ParseSortError;

/// Ordering applied to the aggregated outlet groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceSort {
    /// Descending mean credibility (the default)
    #[default]
    Credibility,
    /// Descending article count
    Count,
    /// Ascending outlet name, case-insensitive
    ///
    /// Compares Unicode-lowercased names by code point; no locale
    /// collation is applied, so accented names sort after ASCII.
    Outlet,
}

impl SourceSort {
    /// Get the sort key name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceSort::Credibility => "credibility",
            SourceSort::Count => "count",
            SourceSort::Outlet => "outlet",
        }
    }
}

impl std::str::FromStr for SourceSort {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "credibility" => Ok(SourceSort::Credibility),
            "count" => Ok(SourceSort::Count),
            "outlet" => Ok(SourceSort::Outlet),
            other => Err(ParseSortError(other.to_string())),
        }
    }
}

/// All sources contributed by one outlet across the whole timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceGroup<'a> {
    /// Outlet name (empty wire outlets appear as "Unknown Source")
    pub outlet: String,

    /// Sources from this outlet, in encounter order
    pub sources: Vec<&'a Source>,

    /// Number of articles from this outlet
    pub article_count: usize,

    /// Arithmetic mean of the sources' credibility scores
    pub average_credibility: f64,
}

/// Group every source across every event by publishing outlet
///
/// Statistics are a simple arithmetic mean over clamped scores, not
/// weighted. Grouping preserves encounter order before the requested
/// sort is applied, so ties order deterministically. A timeline with
/// zero sources yields an empty list, not an error.
pub fn aggregate_sources(events: &[Event], sort: SourceSort) -> Vec<SourceGroup<'_>> {
    let mut groups: Vec<SourceGroup<'_>> = Vec::new();
    let mut index_by_outlet: HashMap<String, usize> = HashMap::new();

    for event in events {
        for source in &event.sources {
            let outlet = source.outlet_name().to_string();
            let idx = *index_by_outlet.entry(outlet.clone()).or_insert_with(|| {
                groups.push(SourceGroup {
                    outlet,
                    sources: Vec::new(),
                    article_count: 0,
                    average_credibility: 0.0,
                });
                groups.len() - 1
            });
            groups[idx].sources.push(source);
            groups[idx].article_count += 1;
        }
    }

    for group in &mut groups {
        let total: f64 = group
            .sources
            .iter()
            .map(|s| clamp_score(s.credibility_score))
            .sum();
        group.average_credibility = total / group.sources.len() as f64;
    }

    match sort {
        SourceSort::Credibility => groups.sort_by(|a, b| {
            b.average_credibility
                .partial_cmp(&a.average_credibility)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        SourceSort::Count => groups.sort_by(|a, b| b.article_count.cmp(&a.article_count)),
        SourceSort::Outlet => {
            groups.sort_by(|a, b| a.outlet.to_lowercase().cmp(&b.outlet.to_lowercase()))
        }
    }

    debug!(outlets = groups.len(), sort = sort.as_str(), "source aggregation pass");
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use braid_domain::Priority;
    use chrono::{TimeZone, Utc};

    fn source(outlet: &str, score: f64) -> Source {
        Source {
            id: format!("{}:{}", outlet, score),
            url: "https://example.com/article".to_string(),
            outlet: outlet.to_string(),
            credibility_score: score,
            publish_date: None,
            claims: vec![],
        }
    }

    fn event_with_sources(id: &str, sources: Vec<Source>) -> Event {
        Event {
            id: id.to_string(),
            title: String::new(),
            description: None,
            event_date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            priority: Priority::Medium,
            branches: vec![],
            sources,
        }
    }

    #[test]
    fn test_grouping_and_statistics() {
        let events = vec![
            event_with_sources("e1", vec![source("A", 0.9), source("B", 0.2)]),
            event_with_sources("e2", vec![source("A", 0.7)]),
        ];
        let groups = aggregate_sources(&events, SourceSort::Credibility);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].outlet, "A");
        assert_eq!(groups[0].article_count, 2);
        assert!((groups[0].average_credibility - 0.8).abs() < 1e-9);
        assert_eq!(groups[1].outlet, "B");
        assert_eq!(groups[1].article_count, 1);
        assert!((groups[1].average_credibility - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_sort_by_count() {
        let events = vec![event_with_sources(
            "e1",
            vec![source("Rare", 0.95), source("Common", 0.4), source("Common", 0.5)],
        )];
        let groups = aggregate_sources(&events, SourceSort::Count);
        let outlets: Vec<_> = groups.iter().map(|g| g.outlet.as_str()).collect();
        assert_eq!(outlets, ["Common", "Rare"]);
    }

    #[test]
    fn test_sort_by_outlet_case_insensitive() {
        let events = vec![event_with_sources(
            "e1",
            vec![source("zeta", 0.5), source("Alpha", 0.5), source("beta", 0.5)],
        )];
        let groups = aggregate_sources(&events, SourceSort::Outlet);
        let outlets: Vec<_> = groups.iter().map(|g| g.outlet.as_str()).collect();
        assert_eq!(outlets, ["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_outlet_sort_is_code_point_order() {
        // No collation tables: "é" (U+00E9) sorts after every ASCII letter
        let events = vec![event_with_sources(
            "e1",
            vec![source("Émission Quotidienne", 0.5), source("zeta", 0.5)],
        )];
        let groups = aggregate_sources(&events, SourceSort::Outlet);
        let outlets: Vec<_> = groups.iter().map(|g| g.outlet.as_str()).collect();
        assert_eq!(outlets, ["zeta", "Émission Quotidienne"]);
    }

    #[test]
    fn test_empty_outlet_becomes_unknown() {
        let events = vec![event_with_sources(
            "e1",
            vec![source("", 0.6), source("  ", 0.4)],
        )];
        let groups = aggregate_sources(&events, SourceSort::Credibility);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].outlet, "Unknown Source");
        assert_eq!(groups[0].article_count, 2);
    }

    #[test]
    fn test_no_sources_empty_list() {
        let events = vec![event_with_sources("e1", vec![])];
        assert!(aggregate_sources(&events, SourceSort::Credibility).is_empty());
        assert!(aggregate_sources(&[], SourceSort::Credibility).is_empty());
    }

    #[test]
    fn test_out_of_range_scores_clamped_in_mean() {
        let events = vec![event_with_sources(
            "e1",
            vec![source("A", 1.6), source("A", 0.4)],
        )];
        let groups = aggregate_sources(&events, SourceSort::Credibility);
        assert!((groups[0].average_credibility - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("credibility".parse::<SourceSort>(), Ok(SourceSort::Credibility));
        assert_eq!("Count".parse::<SourceSort>(), Ok(SourceSort::Count));
        assert_eq!("outlet".parse::<SourceSort>(), Ok(SourceSort::Outlet));
        assert!("relevance".parse::<SourceSort>().is_err());
        assert_eq!(SourceSort::default(), SourceSort::Credibility);
    }
}
