//! Render command implementation.

use crate::cli::RenderArgs;
use crate::config::Settings;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use braid_layout::{layout, Geometry};
use braid_render::SvgRenderer;
use std::fs;
use tracing::info;

/// Execute the render command.
pub fn execute_render(args: RenderArgs, settings: &Settings, formatter: &Formatter) -> Result<()> {
    let width = resolve_width(args.width, settings)?;

    let Some(timeline) = super::load_ready_timeline(&args.file, formatter)? else {
        return Ok(());
    };

    let events = timeline.ready_events();
    let geometry = Geometry::compute(events, width);
    let scene = layout(events, &geometry)?;
    let svg = SvgRenderer::new().render(&scene, &geometry)?;

    info!(
        events = events.len(),
        width = geometry.width,
        height = geometry.height,
        "rendered timeline"
    );

    match args.output {
        Some(path) => {
            fs::write(&path, svg)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote {}", path.display()))
            );
        }
        None => print!("{}", svg),
    }

    Ok(())
}

/// Viewport width for this invocation: `--width` wins, otherwise the
/// configured `viewport_width` applies.
fn resolve_width(requested: Option<f64>, settings: &Settings) -> Result<f64> {
    let width = requested.unwrap_or(settings.viewport_width);
    if !width.is_finite() || width <= 0.0 {
        return Err(CliError::InvalidInput(
            "Viewport width must be a positive number".to_string(),
        ));
    }
    Ok(width)
}
