//! Event module - the fundamental unit of a branching timeline

use crate::priority::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label used when a source carries no outlet name
pub const UNKNOWN_OUTLET: &str = "Unknown Source";

/// A dated occurrence with one or more candidate narratives
///
/// Events are immutable inputs to the engine; every derived structure
/// (layout nodes, divergence entries, source groups) is recomputed
/// from scratch when the event list changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Identifier assigned by the timeline producer
    pub id: String,

    /// Short headline for the event
    pub title: String,

    /// Optional longer description
    #[serde(default)]
    pub description: Option<String>,

    /// When the event occurred
    pub event_date: DateTime<Utc>,

    /// Visual priority level (unknown values degrade to medium)
    #[serde(default)]
    pub priority: Priority,

    /// Candidate narratives, in the order they were received
    ///
    /// Insertion order is narrative order, not credibility order.
    #[serde(default)]
    pub branches: Vec<Branch>,

    /// Corroborating source articles
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl Event {
    /// True divergence: more than one competing narrative
    ///
    /// A lone branch is the consensus case and is never drawn as a fan
    /// or reported by the divergence analyzer.
    pub fn has_divergence(&self) -> bool {
        self.branches.len() > 1
    }
}

/// One candidate narrative for an event, scored for credibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    /// Identifier assigned by the timeline producer
    pub id: String,

    /// The narrative text
    pub narrative: String,

    /// Credibility score, treated as clamped to [0, 1]
    pub credibility_score: f64,

    /// Optional supporting evidence text
    #[serde(default)]
    pub evidence: Option<String>,

    /// Number of sources backing this narrative
    #[serde(default)]
    pub source_count: u32,
}

/// A published article corroborating an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Identifier assigned by the timeline producer
    pub id: String,

    /// Article URL
    pub url: String,

    /// Publishing outlet (may be empty)
    #[serde(default)]
    pub outlet: String,

    /// Credibility score, treated as clamped to [0, 1]
    pub credibility_score: f64,

    /// Publish timestamp, when known
    #[serde(default)]
    pub publish_date: Option<DateTime<Utc>>,

    /// Claims extracted from the article
    #[serde(default)]
    pub claims: Vec<Claim>,
}

impl Source {
    /// Outlet name with the empty-outlet default applied
    pub fn outlet_name(&self) -> &str {
        if self.outlet.trim().is_empty() {
            UNKNOWN_OUTLET
        } else {
            &self.outlet
        }
    }
}

/// A single claim extracted from a source article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim identifier
    #[serde(default)]
    pub claim_id: String,

    /// The claim text
    pub text: String,

    /// Confidence label reported by the producer (e.g. "high")
    #[serde(default)]
    pub confidence: String,

    /// Literal quotes backing the claim
    #[serde(default)]
    pub quotes: Vec<String>,
}
