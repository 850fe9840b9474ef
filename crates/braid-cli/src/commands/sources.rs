//! Sources command implementation.

use crate::cli::SourcesArgs;
use crate::error::Result;
use crate::output::Formatter;
use braid_analysis::aggregate_sources;

/// Execute the sources command.
pub fn execute_sources(args: SourcesArgs, formatter: &Formatter) -> Result<()> {
    let Some(timeline) = super::load_ready_timeline(&args.file, formatter)? else {
        return Ok(());
    };

    let groups = aggregate_sources(timeline.ready_events(), args.sort.into());
    println!("{}", formatter.format_source_groups(&groups)?);

    Ok(())
}
