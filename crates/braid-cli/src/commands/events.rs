//! Events command implementation.

use crate::cli::EventsArgs;
use crate::error::Result;
use crate::output::Formatter;
use braid_analysis::sort_events;

/// Execute the events command.
pub fn execute_events(args: EventsArgs, formatter: &Formatter) -> Result<()> {
    let Some(timeline) = super::load_ready_timeline(&args.file, formatter)? else {
        return Ok(());
    };

    let sorted = sort_events(timeline.ready_events(), args.sort.into());
    println!("{}", formatter.format_events(&sorted)?);

    Ok(())
}
