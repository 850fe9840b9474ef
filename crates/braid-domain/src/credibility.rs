//! Credibility scale shared by branches and sources
//!
//! The level/color mapping is a pure step function with closed-open
//! buckets: a score of exactly 0.8, 0.5, or 0.3 maps to the higher
//! bucket. Every consumer of the scale (layout, analysis, rendering)
//! goes through these helpers so the mapping stays identical
//! everywhere.

/// Credibility level category derived from a [0, 1] score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredibilityLevel {
    /// score >= 0.8
    High,
    /// 0.5 <= score < 0.8
    Medium,
    /// 0.3 <= score < 0.5
    Low,
    /// score < 0.3
    VeryLow,
}

impl CredibilityLevel {
    /// Categorize a credibility score
    ///
    /// The score is clamped to [0, 1] first, so out-of-range input
    /// degrades instead of producing a nonsense category.
    pub fn from_score(score: f64) -> Self {
        let score = clamp_score(score);
        if score >= 0.8 {
            CredibilityLevel::High
        } else if score >= 0.5 {
            CredibilityLevel::Medium
        } else if score >= 0.3 {
            CredibilityLevel::Low
        } else {
            CredibilityLevel::VeryLow
        }
    }

    /// Hex color for this level
    pub fn color(&self) -> &'static str {
        match self {
            CredibilityLevel::High => "#10b981",
            CredibilityLevel::Medium => "#3b82f6",
            CredibilityLevel::Low => "#f59e0b",
            CredibilityLevel::VeryLow => "#ef4444",
        }
    }

    /// Human-readable label for this level
    pub fn label(&self) -> &'static str {
        match self {
            CredibilityLevel::High => "High credibility",
            CredibilityLevel::Medium => "Medium credibility",
            CredibilityLevel::Low => "Low credibility",
            CredibilityLevel::VeryLow => "Very low credibility",
        }
    }
}

/// Clamp a credibility score to [0, 1]
///
/// Scores outside the range are not validated at the boundary; they
/// are clamped at every point of use so a single bad record cannot
/// break layout or aggregation. NaN clamps to 0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

/// Hex color for a credibility score
pub fn hex_color(score: f64) -> &'static str {
    CredibilityLevel::from_score(score).color()
}

/// Format a credibility score as a whole-number percentage, e.g. "85%"
pub fn format_percent(score: f64) -> String {
    format!("{}%", (clamp_score(score) * 100.0).round() as u32)
}
