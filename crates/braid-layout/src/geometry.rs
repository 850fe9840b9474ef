//! Geometry model - canvas dimensions from event list + viewport
//!
//! Pure data. The canvas must always be tall enough to give every
//! event its own vertical slot and wide enough that the branch fan of
//! the most-branched event fits, regardless of how narrow the hosting
//! viewport is.

use braid_domain::Event;
use serde::{Deserialize, Serialize};

/// Minimum canvas height in pixels
pub const MIN_HEIGHT: f64 = 800.0;

/// Vertical slot reserved per event so nodes never overlap
pub const EVENT_SLOT: f64 = 120.0;

/// Extra height below the last slot
pub const HEIGHT_PADDING: f64 = 100.0;

/// Horizontal offset from the axis to the first branch column
pub const BRANCH_START_X: f64 = 120.0;

/// Horizontal spacing between branch columns
pub const BRANCH_SPACING: f64 = 80.0;

/// Fixed canvas margins
///
/// Left reserves space for date labels; right pads labels that
/// overflow the last branch column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin, pixels
    pub top: f64,
    /// Right margin, pixels
    pub right: f64,
    /// Bottom margin, pixels
    pub bottom: f64,
    /// Left margin, pixels
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 200.0,
            bottom: 40.0,
            left: 160.0,
        }
    }
}

/// Computed canvas geometry for one event list + viewport width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Full canvas width, pixels
    pub width: f64,
    /// Full canvas height, pixels
    pub height: f64,
    /// Fixed margins
    pub margins: Margins,
    /// Number of events this geometry was computed from
    pub event_count: usize,
}

impl Geometry {
    /// Compute canvas geometry for an event list and viewport width
    ///
    /// - `height = max(800, n * 120 + 100)` guarantees a 120px slot
    ///   per event regardless of viewport.
    /// - `width = max(viewport, left + branch_start + max_branches * 80
    ///   + right)` so the widest branch fan always fits.
    ///
    /// Must be recomputed whenever the event list or the measured
    /// viewport width changes.
    pub fn compute(events: &[Event], viewport_width: f64) -> Self {
        let margins = Margins::default();

        let max_branches = events
            .iter()
            .map(|e| e.branches.len())
            .max()
            .unwrap_or(0)
            .max(1); // fan width is reserved even for branch-less lists

        let min_width =
            margins.left + BRANCH_START_X + max_branches as f64 * BRANCH_SPACING + margins.right;
        let width = viewport_width.max(min_width);

        let height = MIN_HEIGHT.max(events.len() as f64 * EVENT_SLOT + HEIGHT_PADDING);

        Self {
            width,
            height,
            margins,
            event_count: events.len(),
        }
    }

    /// Plotted height: canvas height minus vertical margins
    pub fn plot_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use braid_domain::{Branch, Priority};
    use chrono::{TimeZone, Utc};

    fn event_with_branches(n: usize) -> Event {
        Event {
            id: format!("e{}", n),
            title: "Event".to_string(),
            description: None,
            event_date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            priority: Priority::Medium,
            branches: (0..n)
                .map(|i| Branch {
                    id: format!("b{}", i),
                    narrative: String::new(),
                    credibility_score: 0.5,
                    evidence: None,
                    source_count: 0,
                })
                .collect(),
            sources: vec![],
        }
    }

    #[test]
    fn test_minimum_height() {
        let geometry = Geometry::compute(&[], 1200.0);
        assert_eq!(geometry.height, 800.0);

        // 5 events still fit under the floor
        let events: Vec<_> = (0..5).map(|_| event_with_branches(0)).collect();
        assert_eq!(Geometry::compute(&events, 1200.0).height, 800.0);
    }

    #[test]
    fn test_height_grows_per_event() {
        let events: Vec<_> = (0..10).map(|_| event_with_branches(0)).collect();
        let geometry = Geometry::compute(&events, 1200.0);
        assert_eq!(geometry.height, 10.0 * 120.0 + 100.0);
    }

    #[test]
    fn test_width_fits_branch_fan() {
        let events = vec![event_with_branches(5)];
        let geometry = Geometry::compute(&events, 0.0);
        // 160 + 120 + 5*80 + 200
        assert_eq!(geometry.width, 880.0);
    }

    #[test]
    fn test_wide_viewport_wins() {
        let events = vec![event_with_branches(2)];
        let geometry = Geometry::compute(&events, 1600.0);
        assert_eq!(geometry.width, 1600.0);
    }

    #[test]
    fn test_branchless_list_reserves_one_column() {
        let geometry = Geometry::compute(&[event_with_branches(0)], 0.0);
        assert_eq!(geometry.width, 160.0 + 120.0 + 80.0 + 200.0);
    }

    #[test]
    fn test_plot_height() {
        let geometry = Geometry::compute(&[], 1200.0);
        assert_eq!(geometry.plot_height(), 800.0 - 40.0 - 40.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use braid_domain::Priority;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn events_of(n: usize, branches: usize) -> Vec<Event> {
        (0..n)
            .map(|i| Event {
                id: format!("e{}", i),
                title: String::new(),
                description: None,
                event_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                priority: Priority::Low,
                branches: (0..branches)
                    .map(|j| braid_domain::Branch {
                        id: format!("b{}", j),
                        narrative: String::new(),
                        credibility_score: 0.5,
                        evidence: None,
                        source_count: 0,
                    })
                    .collect(),
                sources: vec![],
            })
            .collect()
    }

    proptest! {
        /// Property: height >= max(800, n*120+100) for all inputs
        #[test]
        fn test_height_lower_bound(n in 0usize..50, viewport in 0.0f64..4000.0) {
            let events = events_of(n, 0);
            let geometry = Geometry::compute(&events, viewport);
            prop_assert!(geometry.height >= MIN_HEIGHT);
            prop_assert!(geometry.height >= n as f64 * EVENT_SLOT + HEIGHT_PADDING);
        }

        /// Property: width >= max(viewport, fan width) for all inputs
        #[test]
        fn test_width_lower_bound(
            n in 1usize..20,
            branches in 0usize..8,
            viewport in 0.0f64..4000.0,
        ) {
            let events = events_of(n, branches);
            let geometry = Geometry::compute(&events, viewport);
            let fan = 160.0 + 120.0 + branches.max(1) as f64 * 80.0 + 200.0;
            prop_assert!(geometry.width >= viewport);
            prop_assert!(geometry.width >= fan);
        }
    }
}
