//! Trait definitions for external collaborators
//!
//! These traits define the boundary between the engine and the data
//! producer. The engine never performs I/O itself; implementations
//! live in outer crates (the CLI ships a JSON-file-backed provider).

use crate::status::TimelineStatus;
use crate::timeline::Timeline;

/// Status snapshot delivered while a timeline is being constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Timeline identifier
    pub id: String,

    /// Current processing status
    pub status: TimelineStatus,

    /// Progress string, `"<current>/<total>"`
    pub progress: String,
}

/// Trait for obtaining timeline data
///
/// The producer polls `status` on an interval while processing and
/// fetches the full timeline once `completed`. Retry and backoff
/// policy belongs entirely to implementations; the engine only ever
/// sees complete, immutable snapshots.
pub trait TimelineProvider {
    /// Error type for provider operations
    type Error;

    /// Get the current processing status of a timeline
    fn status(&self, id: &str) -> Result<StatusSnapshot, Self::Error>;

    /// Fetch the full timeline document
    fn timeline(&self, id: &str) -> Result<Timeline, Self::Error>;
}
