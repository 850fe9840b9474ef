//! Synthetic demo timeline generator.

use braid_domain::{Branch, Claim, Event, Priority, Source, Timeline, TimelineStatus};
use chrono::{TimeZone, Utc};
use uuid::Uuid;

/// Build a synthetic timeline exercising every engine surface: all
/// four priorities, a multi-branch divergence, repeated outlets, and
/// an out-of-order event date for the layout sort to fix up.
pub fn build_demo_timeline() -> Timeline {
    let events = vec![
        Event {
            id: "demo-event-1".to_string(),
            title: "River gauge crosses major flood stage at Millerton".to_string(),
            description: Some(
                "Automated gauge readings confirmed by the county water authority.".to_string(),
            ),
            event_date: Utc.with_ymd_and_hms(2024, 3, 1, 6, 15, 0).unwrap(),
            priority: Priority::High,
            branches: vec![],
            sources: vec![
                source("demo-source-1", "Regional Herald", 0.82, "Gauge readings verified"),
                source("demo-source-2", "City Desk Daily", 0.64, "Flood stage exceeded"),
            ],
        },
        Event {
            id: "demo-event-2".to_string(),
            title: "Levee breach reported east of the rail bridge".to_string(),
            description: Some("Initial reports conflict on the cause of the breach.".to_string()),
            event_date: Utc.with_ymd_and_hms(2024, 3, 1, 14, 40, 0).unwrap(),
            priority: Priority::Critical,
            branches: vec![
                Branch {
                    id: "demo-branch-2a".to_string(),
                    narrative: "Structural failure under sustained flood pressure".to_string(),
                    credibility_score: 0.85,
                    evidence: Some("Engineering survey photos, two eyewitnesses".to_string()),
                    source_count: 4,
                },
                Branch {
                    id: "demo-branch-2b".to_string(),
                    narrative: "Controlled release ordered to protect the downtown district"
                        .to_string(),
                    credibility_score: 0.35,
                    evidence: Some("Single unverified social media post".to_string()),
                    source_count: 1,
                },
                Branch {
                    id: "demo-branch-2c".to_string(),
                    narrative: "Sabotage by upstream landowners".to_string(),
                    credibility_score: 0.1,
                    evidence: None,
                    source_count: 1,
                },
            ],
            sources: vec![
                source("demo-source-3", "Regional Herald", 0.82, "Breach confirmed"),
                source("demo-source-4", "The Daily Signal Post", 0.28, "Release was deliberate"),
            ],
        },
        Event {
            id: "demo-event-3".to_string(),
            title: "Evacuation order issued for three riverside neighborhoods with a deliberately overlong title to exercise label truncation".to_string(),
            description: None,
            event_date: Utc.with_ymd_and_hms(2024, 3, 1, 16, 5, 0).unwrap(),
            priority: Priority::Critical,
            branches: vec![],
            sources: vec![source(
                "demo-source-5",
                "Regional Herald",
                0.82,
                "Order covers 12,000 residents",
            )],
        },
        // Dated before the others; the layout sort should move it first
        Event {
            id: "demo-event-0".to_string(),
            title: "Storm system stalls over the upper watershed".to_string(),
            description: None,
            event_date: Utc.with_ymd_and_hms(2024, 2, 29, 21, 30, 0).unwrap(),
            priority: Priority::Medium,
            branches: vec![],
            sources: vec![source(
                "demo-source-0",
                "National Weather Desk",
                0.93,
                "Rainfall totals exceed forecast",
            )],
        },
        Event {
            id: "demo-event-4".to_string(),
            title: "Shelters report adequate capacity".to_string(),
            description: None,
            event_date: Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(),
            priority: Priority::Low,
            branches: vec![
                Branch {
                    id: "demo-branch-4a".to_string(),
                    narrative: "Capacity confirmed by shelter coordinators".to_string(),
                    credibility_score: 0.75,
                    evidence: None,
                    source_count: 2,
                },
                Branch {
                    id: "demo-branch-4b".to_string(),
                    narrative: "Overflow reported at the fairground site".to_string(),
                    credibility_score: 0.45,
                    evidence: None,
                    source_count: 1,
                },
            ],
            sources: vec![source("demo-source-6", "", 0.5, "Unattributed wire copy")],
        },
    ];

    Timeline {
        id: Uuid::new_v4().to_string(),
        topic: "Millerton flood".to_string(),
        query: "millerton river flood levee".to_string(),
        status: TimelineStatus::Completed,
        progress: "5/5".to_string(),
        date_range_start: Some(Utc.with_ymd_and_hms(2024, 2, 29, 21, 30, 0).unwrap()),
        date_range_end: Some(Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap()),
        created_at: Utc::now(),
        events,
    }
}

fn source(id: &str, outlet: &str, credibility: f64, claim: &str) -> Source {
    Source {
        id: id.to_string(),
        url: format!("https://news.example.com/{}", id),
        outlet: outlet.to_string(),
        credibility_score: credibility,
        publish_date: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
        claims: vec![Claim {
            claim_id: format!("{}-claim-1", id),
            text: claim.to_string(),
            confidence: if credibility >= 0.5 { "high" } else { "low" }.to_string(),
            quotes: vec![],
        }],
    }
}
