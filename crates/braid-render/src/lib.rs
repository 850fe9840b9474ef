//! Braid SVG Renderer
//!
//! Serializes a pure [`Scene`](braid_layout::Scene) into a standalone
//! SVG document. The renderer makes no layout decisions of its own:
//! coordinates, colors, and dash patterns are carried through from the
//! scene, and the geometry's margins become a single group transform.
//! Keeping the drawing backend behind this seam is what lets the
//! layout math stay unit-testable without a display surface.

#![warn(clippy::all)]

use std::fmt::Write;

use braid_layout::{Anchor, Geometry, Scene, Shape};
use thiserror::Error;

/// Errors that can occur while serializing a scene
#[derive(Error, Debug)]
pub enum RenderError {
    /// Buffer write failed
    #[error("failed to write SVG output: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Scene-to-SVG serializer
#[derive(Debug, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    /// Create a renderer
    pub fn new() -> Self {
        Self
    }

    /// Render a scene into a standalone SVG document
    pub fn render(&self, scene: &Scene, geometry: &Geometry) -> Result<String, RenderError> {
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            geometry.width, geometry.height
        )?;
        writeln!(
            out,
            r#"  <g transform="translate({},{})">"#,
            geometry.margins.left, geometry.margins.top
        )?;

        for primitive in scene.primitives() {
            write!(out, "    ")?;
            self.write_shape(&mut out, &primitive.shape)?;
            writeln!(out)?;
        }

        writeln!(out, "  </g>")?;
        writeln!(out, "</svg>")?;
        Ok(out)
    }

    fn write_shape(&self, out: &mut String, shape: &Shape) -> Result<(), RenderError> {
        match shape {
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
                stroke_width,
            } => write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                x1, y1, x2, y2, stroke, stroke_width
            )?,
            Shape::Circle {
                cx,
                cy,
                r,
                fill,
                stroke,
                stroke_width,
            } => write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                cx, cy, r, fill, stroke, stroke_width
            )?,
            Shape::Rect {
                x,
                y,
                width,
                height,
                rx,
                fill,
                stroke,
                stroke_width,
            } => write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                x, y, width, height, rx, fill, stroke, stroke_width
            )?,
            Shape::Text {
                x,
                y,
                content,
                anchor,
                font_size,
                font_weight,
                fill,
            } => write!(
                out,
                r#"<text x="{}" y="{}" text-anchor="{}" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
                x,
                y,
                anchor_name(*anchor),
                font_size,
                font_weight,
                fill,
                escape_text(content)
            )?,
            Shape::Path {
                d,
                stroke,
                stroke_width,
                dash,
                opacity,
            } => {
                write!(
                    out,
                    r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" opacity="{}""#,
                    d, stroke, stroke_width, opacity
                )?;
                if let Some(pattern) = dash {
                    write!(out, r#" stroke-dasharray="{}""#, pattern)?;
                }
                write!(out, "/>")?;
            }
        }
        Ok(())
    }
}

fn anchor_name(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

/// Escape text content for XML
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
