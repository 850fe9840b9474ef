//! Status command implementation.

use crate::cli::StatusArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::provider::FileProvider;
use braid_domain::TimelineProvider;

/// Execute the status command.
pub fn execute_status(args: StatusArgs, formatter: &Formatter) -> Result<()> {
    let provider = FileProvider::new(&args.file);
    let snapshot = provider.status("")?;
    println!("{}", formatter.format_status(&snapshot)?);

    Ok(())
}
