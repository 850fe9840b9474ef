//! Braid Layout Engine
//!
//! Turns an event list plus a viewport width into deterministic 2D
//! geometry: canvas dimensions, node positions along a vertical time
//! axis, branch fan-outs for events with competing narratives, and the
//! connecting paths and labels between them.
//!
//! The output is a pure [`Scene`] - an ordered list of drawable
//! primitives tagged with the event/branch they came from - so the
//! hard layout math stays unit-testable without a display surface.
//! Hit-testing against the scene is how pointer interaction resolves
//! back to events.
//!
//! Everything here is a pure function of its input: identical event
//! lists and viewport widths yield byte-identical scenes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod geometry;
pub mod scene;
pub mod text;

mod error;

pub use engine::{layout, layout_nodes, TimelineNode};
pub use error::LayoutError;
pub use geometry::{Geometry, Margins};
pub use scene::{Anchor, HitTarget, Origin, Primitive, Scene, Shape};
pub use text::{format_date_time, truncate_title};
