//! JSON-file-backed timeline provider.

use crate::error::{CliError, Result};
use braid_domain::{StatusSnapshot, Timeline, TimelineProvider};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Timeline provider that reads timeline documents from JSON files.
///
/// The file path itself identifies the timeline, so the `id` passed to
/// the provider methods is ignored in favor of the configured path.
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    /// Create a provider backed by the given JSON document.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load and parse the backing document.
    pub fn load(&self) -> Result<Timeline> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            CliError::InvalidInput(format!("Cannot read {}: {}", self.path.display(), e))
        })?;
        let timeline: Timeline = serde_json::from_str(&contents)?;
        debug!(
            path = %self.path.display(),
            events = timeline.events.len(),
            status = timeline.status.as_str(),
            "loaded timeline document"
        );
        Ok(timeline)
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TimelineProvider for FileProvider {
    type Error = CliError;

    fn status(&self, _id: &str) -> Result<StatusSnapshot> {
        let timeline = self.load()?;
        Ok(StatusSnapshot {
            id: timeline.id,
            status: timeline.status,
            progress: timeline.progress,
        })
    }

    fn timeline(&self, _id: &str) -> Result<Timeline> {
        self.load()
    }
}
