//! Branches command implementation.

use crate::cli::BranchesArgs;
use crate::error::Result;
use crate::output::Formatter;
use braid_analysis::analyze_divergence;

/// Execute the branches command.
pub fn execute_branches(args: BranchesArgs, formatter: &Formatter) -> Result<()> {
    let Some(timeline) = super::load_ready_timeline(&args.file, formatter)? else {
        return Ok(());
    };

    let divergences = analyze_divergence(timeline.ready_events());
    println!("{}", formatter.format_divergences(&divergences)?);

    Ok(())
}
