//! Timeline - the complete document delivered by the producer

use crate::event::Event;
use crate::status::{Progress, TimelineStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A complete timeline document as delivered by the fetching collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Timeline identifier
    pub id: String,

    /// Topic the timeline covers
    #[serde(default)]
    pub topic: String,

    /// The query this timeline was built from
    #[serde(default)]
    pub query: String,

    /// Processing status
    pub status: TimelineStatus,

    /// Progress string, `"<current>/<total>"`
    #[serde(default)]
    pub progress: String,

    /// Earliest event date, when known
    #[serde(default)]
    pub date_range_start: Option<DateTime<Utc>>,

    /// Latest event date, when known
    #[serde(default)]
    pub date_range_end: Option<DateTime<Utc>>,

    /// When the timeline was created
    pub created_at: DateTime<Utc>,

    /// The event list; empty unless status is `completed`
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Timeline {
    /// Parsed progress fraction
    pub fn progress(&self) -> Progress {
        Progress::parse(&self.progress)
    }

    /// Events the engine may compute over
    ///
    /// `Processing` and `Failed` timelines yield no input regardless
    /// of what the events field contains.
    pub fn ready_events(&self) -> &[Event] {
        if self.status.is_ready() {
            &self.events
        } else {
            &[]
        }
    }
}
