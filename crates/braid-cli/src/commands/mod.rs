//! Command implementations.

pub mod branches;
pub mod demo;
pub mod events;
pub mod render;
pub mod sources;
pub mod status;

pub use self::branches::execute_branches;
pub use self::demo::execute_demo;
pub use self::events::execute_events;
pub use self::render::execute_render;
pub use self::sources::execute_sources;
pub use self::status::execute_status;

use crate::error::Result;
use crate::output::Formatter;
use crate::provider::FileProvider;
use braid_domain::{Timeline, TimelineProvider};
use std::path::Path;

/// Load a timeline document, warning when it has no usable events.
///
/// Returns `None` for `processing` and `failed` timelines after
/// printing the status line, so commands that need event data can
/// bail out uniformly.
pub(crate) fn load_ready_timeline(
    path: &Path,
    formatter: &Formatter,
) -> Result<Option<Timeline>> {
    let provider = FileProvider::new(path);
    let timeline = provider.timeline("")?;

    if !timeline.status.is_ready() {
        let message = if timeline.progress.is_empty() {
            format!("Timeline '{}' is {}", timeline.id, timeline.status)
        } else {
            format!(
                "Timeline '{}' is {} ({})",
                timeline.id, timeline.status, timeline.progress
            )
        };
        println!("{}", formatter.warning(&message));
        return Ok(None);
    }

    Ok(Some(timeline))
}
