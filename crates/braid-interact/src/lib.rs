//! Braid Interaction Controller
//!
//! Maps pointer events against the layout engine's hit-test surface to
//! transient UI state: a hover target with tooltip content, and
//! click-to-select reported upward through a callback. The controller
//! owns the only mutable state in the engine (the current hover and
//! viewport width); selection persistence belongs to the hosting
//! detail view, not here.
//!
//! Every data or viewport change recomputes geometry and scene from
//! scratch and discards the hover, so no stale target can ever
//! reference recomputed geometry.

#![warn(missing_docs)]
#![warn(clippy::all)]

use braid_domain::{Event, Priority};
use braid_layout::text::format_date_time;
use braid_layout::{layout, Geometry, LayoutError, Origin, Scene};
use tracing::debug;

/// Hit-test tolerance radius in pixels
pub const HIT_TOLERANCE: f64 = 5.0;

/// Factor by which a hovered node's radius grows
pub const HOVER_RADIUS_SCALE: f64 = 1.3;

/// Transient hover state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HoverState {
    /// No node under the pointer
    #[default]
    Idle,
    /// Pointer is over a node primitive
    Hovering {
        /// The hovered primitive's origin
        target: Origin,
        /// Pointer position captured for tooltip placement, plot space
        pointer: (f64, f64),
    },
}

/// Tooltip content for the hovered event
///
/// Derived fresh from the event on every query, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Event title
    pub title: String,
    /// Formatted event date/time
    pub date_time: String,
    /// Event priority
    pub priority: Priority,
    /// Number of candidate narratives
    pub branch_count: usize,
    /// Number of sources
    pub source_count: usize,
    /// Tooltip anchor position, plot space
    pub position: (f64, f64),
}

impl Tooltip {
    /// The tooltip's detail line, e.g.
    /// "Priority: high • 2 narratives • 1 source"
    pub fn summary(&self) -> String {
        format!(
            "Priority: {} • {} narrative{} • {} source{}",
            self.priority,
            self.branch_count,
            if self.branch_count == 1 { "" } else { "s" },
            self.source_count,
            if self.source_count == 1 { "" } else { "s" },
        )
    }
}

/// Owns hover/viewport state and the current geometry + scene
#[derive(Debug)]
pub struct InteractionController {
    events: Vec<Event>,
    viewport_width: f64,
    geometry: Geometry,
    scene: Scene,
    hover: HoverState,
}

impl InteractionController {
    /// Build a controller for an event list and viewport width
    pub fn new(events: Vec<Event>, viewport_width: f64) -> Result<Self, LayoutError> {
        let geometry = Geometry::compute(&events, viewport_width);
        let scene = layout(&events, &geometry)?;
        Ok(Self {
            events,
            viewport_width,
            geometry,
            scene,
            hover: HoverState::Idle,
        })
    }

    /// The current scene
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The current geometry
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The current hover state
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Replace the event list, recomputing everything derived
    ///
    /// The latest input always wins; any hover referencing the old
    /// scene is discarded.
    pub fn set_events(&mut self, events: Vec<Event>) -> Result<(), LayoutError> {
        self.events = events;
        self.relayout()
    }

    /// Handle a viewport resize
    ///
    /// Re-invokes geometry and layout; hover state is not preserved
    /// across a resize-triggered relayout.
    pub fn resize(&mut self, viewport_width: f64) -> Result<(), LayoutError> {
        self.viewport_width = viewport_width;
        self.relayout()
    }

    fn relayout(&mut self) -> Result<(), LayoutError> {
        self.geometry = Geometry::compute(&self.events, self.viewport_width);
        self.scene = layout(&self.events, &self.geometry)?;
        self.hover = HoverState::Idle;
        debug!(
            events = self.events.len(),
            width = self.geometry.width,
            "relayout, hover cleared"
        );
        Ok(())
    }

    /// Pointer entered the canvas or moved to (x, y), plot space
    ///
    /// Transitions to `Hovering` when a node primitive is within the
    /// hit tolerance, capturing the pointer position for tooltip
    /// placement; otherwise to `Idle`.
    pub fn pointer_enter(&mut self, x: f64, y: f64) {
        self.hover = match self.scene.hit_test(x, y, HIT_TOLERANCE) {
            Some(hit) => HoverState::Hovering {
                target: hit.origin,
                pointer: (x, y),
            },
            None => HoverState::Idle,
        };
    }

    /// Pointer left the hovered node: clear tooltip, revert radius
    pub fn pointer_leave(&mut self) {
        self.hover = HoverState::Idle;
    }

    /// Click at (x, y): invoke the selection callback with the
    /// underlying event
    ///
    /// Selection is reported upward and not retained; hover state is
    /// unchanged. Returns whether a node was hit.
    pub fn click<F>(&self, x: f64, y: f64, on_select: F) -> bool
    where
        F: FnOnce(&Event),
    {
        let Some(hit) = self.scene.hit_test(x, y, HIT_TOLERANCE) else {
            return false;
        };
        let Some(event) = self.event_for(&hit.origin) else {
            return false;
        };
        on_select(event);
        true
    }

    /// Tooltip content for the current hover, if any
    ///
    /// Derived directly from the hovered event each call. A branch hit
    /// resolves to its owning event.
    pub fn tooltip(&self) -> Option<Tooltip> {
        let HoverState::Hovering { target, pointer } = &self.hover else {
            return None;
        };
        let event = self.event_for(target)?;
        Some(Tooltip {
            title: event.title.clone(),
            date_time: format_date_time(&event.event_date),
            priority: event.priority,
            branch_count: event.branches.len(),
            source_count: event.sources.len(),
            position: *pointer,
        })
    }

    /// Visual radius for an event node, applying hover growth
    ///
    /// The hovered node renders 30% larger; the growth is pure visual
    /// feedback and reverts on pointer leave.
    pub fn node_radius(&self, event: &Event) -> f64 {
        let base = event.priority.radius();
        match &self.hover {
            HoverState::Hovering {
                target: Origin::Event(id),
                ..
            } if *id == event.id => base * HOVER_RADIUS_SCALE,
            _ => base,
        }
    }

    fn event_for(&self, origin: &Origin) -> Option<&Event> {
        let id = match origin {
            Origin::Event(id) => id,
            Origin::Branch { event_id, .. } => event_id,
            Origin::Chrome => return None,
        };
        self.events.iter().find(|e| e.id == *id)
    }
}
