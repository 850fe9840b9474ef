//! Priority module - visual weighting for events

use serde::{Deserialize, Serialize};

/// Priority level of an event
///
/// Priority drives the visual treatment of an event node (radius and
/// color). Unknown wire values degrade to `Medium` rather than failing
/// deserialization, so one bad record never blanks a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Priority {
    /// Highest importance (largest node)
    Critical,

    /// Elevated importance
    High,

    /// Default importance
    Medium,

    /// Lowest importance (smallest node)
    Low,
}

impl Priority {
    /// Get the priority name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parse a priority from a string, case-insensitively
    ///
    /// Returns `None` for unrecognized values; callers that need the
    /// degrade-to-medium behavior go through `From<String>` instead.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Some(Priority::Critical),
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Node radius in pixels for this priority
    pub fn radius(&self) -> f64 {
        match self {
            Priority::Critical => 16.0,
            Priority::High => 12.0,
            Priority::Medium => 10.0,
            Priority::Low => 8.0,
        }
    }

    /// Node fill color for this priority
    pub fn color(&self) -> &'static str {
        match self {
            Priority::Critical => "#ef4444",
            Priority::High => "#f59e0b",
            Priority::Medium => "#3b82f6",
            Priority::Low => "#6b7280",
        }
    }

    /// Sort rank, highest priority first (critical = 0)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        Priority::parse(&s).unwrap_or(Priority::Medium)
    }
}

impl From<Priority> for &'static str {
    fn from(p: Priority) -> Self {
        p.as_str()
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
