//! Demo command implementation.

use crate::cli::DemoArgs;
use crate::demo::build_demo_timeline;
use crate::error::Result;
use crate::output::Formatter;
use std::fs;

/// Execute the demo command.
pub fn execute_demo(args: DemoArgs, formatter: &Formatter) -> Result<()> {
    let timeline = build_demo_timeline();
    let json = serde_json::to_string_pretty(&timeline)?;

    match args.output {
        Some(path) => {
            fs::write(&path, json)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Wrote demo timeline ({} events) to {}",
                    timeline.events.len(),
                    path.display()
                ))
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
