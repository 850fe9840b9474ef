//! Timeline status - the coarse processing state polled by the UI

use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing status of a timeline
///
/// The engine only computes over `Completed` timelines; `Processing`
/// and `Failed` both mean "no input yet" as far as layout and the
/// aggregators are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineStatus {
    /// Timeline construction is still running upstream
    Processing,

    /// The full event list is available
    Completed,

    /// Upstream construction failed; no event list will arrive
    Failed,
}

impl TimelineStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineStatus::Processing => "processing",
            TimelineStatus::Completed => "completed",
            TimelineStatus::Failed => "failed",
        }
    }

    /// Whether the engine has input to compute over
    pub fn is_ready(&self) -> bool {
        matches!(self, TimelineStatus::Completed)
    }
}

impl fmt::Display for TimelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress fraction reported while a timeline is processing
///
/// The wire format is the literal string `"<current>/<total>"`.
/// Progress is advisory display data, so malformed strings parse to
/// 0/0 instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Steps completed so far
    pub current: u32,
    /// Total steps expected
    pub total: u32,
}

impl Progress {
    /// Parse a `"current/total"` progress string leniently
    pub fn parse(s: &str) -> Self {
        let mut parts = s.splitn(2, '/');
        let current = parts
            .next()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(0);
        let total = parts
            .next()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(0);
        Self { current, total }
    }

    /// Completion fraction in [0, 1]; 0 when the total is unknown
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.current as f64 / self.total as f64).clamp(0.0, 1.0)
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}
