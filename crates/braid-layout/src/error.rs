//! Layout error types

use thiserror::Error;

/// Errors that can occur while building a scene
///
/// Layout itself is total over its input records (bad scores clamp,
/// unknown priorities degrade); the only failure mode is being handed
/// a geometry that was computed for a different event list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Geometry was computed for a different number of events
    #[error("geometry was computed for {geometry_events} events, layout received {layout_events}")]
    StaleGeometry {
        /// Event count the geometry was computed from
        geometry_events: usize,
        /// Event count handed to layout
        layout_events: usize,
    },
}
