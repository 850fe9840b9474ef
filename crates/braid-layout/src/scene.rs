//! Scene - the immutable drawable output of layout
//!
//! A scene is an ordered list of positioned primitives, each tagged
//! with the event or branch it came from. Renderers draw it; the
//! interaction layer hit-tests it. Coordinates are in plot space,
//! i.e. relative to the top-left of the margined plotting area.

use serde::{Deserialize, Serialize};

/// Text anchor for label primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Left-aligned at (x, y)
    Start,
    /// Centered on x
    Middle,
    /// Right-aligned at (x, y)
    End,
}

/// What a primitive was emitted for
///
/// The origin is the stable identifier hit-testing resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    /// Axis, date labels, and other chrome not tied to a record
    Chrome,
    /// Emitted for an event node or its labels
    Event(String),
    /// Emitted for one branch of an event's fan
    Branch {
        /// Owning event id
        event_id: String,
        /// Branch id
        branch_id: String,
    },
}

/// A single drawable primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Straight line segment
    Line {
        /// Start x
        x1: f64,
        /// Start y
        y1: f64,
        /// End x
        x2: f64,
        /// End y
        y2: f64,
        /// Stroke color
        stroke: String,
        /// Stroke width
        stroke_width: f64,
    },
    /// Filled circle
    Circle {
        /// Center x
        cx: f64,
        /// Center y
        cy: f64,
        /// Radius
        r: f64,
        /// Fill color
        fill: String,
        /// Stroke color
        stroke: String,
        /// Stroke width
        stroke_width: f64,
    },
    /// Rounded rectangle
    Rect {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
        /// Corner radius
        rx: f64,
        /// Fill color
        fill: String,
        /// Stroke color
        stroke: String,
        /// Stroke width
        stroke_width: f64,
    },
    /// Text label
    Text {
        /// Anchor x
        x: f64,
        /// Baseline y
        y: f64,
        /// Label content
        content: String,
        /// Horizontal anchoring
        anchor: Anchor,
        /// Font size in pixels
        font_size: f64,
        /// CSS font weight
        font_weight: u16,
        /// Text color
        fill: String,
    },
    /// Multi-segment path (SVG path syntax)
    Path {
        /// Path data
        d: String,
        /// Stroke color
        stroke: String,
        /// Stroke width
        stroke_width: f64,
        /// Dash pattern, `None` for solid
        dash: Option<String>,
        /// Stroke opacity
        opacity: f64,
    },
}

/// A tagged primitive within a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// Originating record
    pub origin: Origin,
    /// Drawable shape
    pub shape: Shape,
}

/// Result of a hit test: the nearest interactive primitive
#[derive(Debug, Clone, PartialEq)]
pub struct HitTarget {
    /// Origin of the primitive that was hit
    pub origin: Origin,
    /// Distance from the pointer to the primitive's edge (0 if inside)
    pub distance: f64,
}

/// An immutable, ordered scene of drawable primitives
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    pub(crate) fn push(&mut self, origin: Origin, shape: Shape) {
        self.primitives.push(Primitive { origin, shape });
    }

    /// All primitives in draw order
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Whether the scene contains no primitives
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Number of primitives
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Resolve a plot-space pixel coordinate to the nearest node
    ///
    /// Only circle primitives with an event or branch origin
    /// participate; labels and connectors are pass-through, matching
    /// pointer-events behavior in the visual surface. Distance is
    /// measured to the circle edge, so a pointer inside a node is at
    /// distance 0. Ties resolve to the earlier primitive in draw
    /// order, keeping hit-testing deterministic.
    pub fn hit_test(&self, x: f64, y: f64, tolerance: f64) -> Option<HitTarget> {
        let mut best: Option<HitTarget> = None;

        for primitive in &self.primitives {
            if primitive.origin == Origin::Chrome {
                continue;
            }
            let Shape::Circle { cx, cy, r, .. } = primitive.shape else {
                continue;
            };

            let center_distance = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
            let edge_distance = (center_distance - r).max(0.0);
            if edge_distance > tolerance {
                continue;
            }

            let closer = match &best {
                Some(current) => edge_distance < current.distance,
                None => true,
            };
            if closer {
                best = Some(HitTarget {
                    origin: primitive.origin.clone(),
                    distance: edge_distance,
                });
            }
        }

        best
    }
}
