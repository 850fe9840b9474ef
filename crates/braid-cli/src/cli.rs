//! CLI command definitions and argument parsing.

use braid_analysis::{EventSort, SourceSort};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Braid CLI - Inspect and render branching timelines.
#[derive(Debug, Parser)]
#[command(name = "braid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lay out a timeline and export it as SVG
    Render(RenderArgs),

    /// List timeline events
    Events(EventsArgs),

    /// Report narrative divergences
    Branches(BranchesArgs),

    /// Report per-outlet source statistics
    Sources(SourcesArgs),

    /// Show timeline processing status
    Status(StatusArgs),

    /// Generate a synthetic demo timeline
    Demo(DemoArgs),
}

/// Arguments for the render command.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    /// Timeline JSON document
    pub file: PathBuf,

    /// Output path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Viewport width in pixels (falls back to the configured
    /// `viewport_width`)
    #[arg(short, long)]
    pub width: Option<f64>,
}

/// Arguments for the events command.
#[derive(Debug, Parser)]
pub struct EventsArgs {
    /// Timeline JSON document
    pub file: PathBuf,

    /// Sort order
    #[arg(short, long, value_enum, default_value = "date-asc")]
    pub sort: EventSortArg,
}

/// Arguments for the branches command.
#[derive(Debug, Parser)]
pub struct BranchesArgs {
    /// Timeline JSON document
    pub file: PathBuf,
}

/// Arguments for the sources command.
#[derive(Debug, Parser)]
pub struct SourcesArgs {
    /// Timeline JSON document
    pub file: PathBuf,

    /// Sort order
    #[arg(short, long, value_enum, default_value = "credibility")]
    pub sort: SourceSortArg,
}

/// Arguments for the status command.
#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Timeline JSON document
    pub file: PathBuf,
}

/// Arguments for the demo command.
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Output path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Event sort order.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum EventSortArg {
    /// Oldest first
    DateAsc,
    /// Newest first
    DateDesc,
    /// Critical > high > medium > low
    Priority,
}

impl From<EventSortArg> for EventSort {
    fn from(arg: EventSortArg) -> Self {
        match arg {
            EventSortArg::DateAsc => EventSort::DateAsc,
            EventSortArg::DateDesc => EventSort::DateDesc,
            EventSortArg::Priority => EventSort::Priority,
        }
    }
}

/// Source group sort order.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SourceSortArg {
    /// Descending mean credibility
    Credibility,
    /// Descending article count
    Count,
    /// Ascending outlet name
    Outlet,
}

impl From<SourceSortArg> for SourceSort {
    fn from(arg: SourceSortArg) -> Self {
        match arg {
            SourceSortArg::Credibility => SourceSort::Credibility,
            SourceSortArg::Count => SourceSort::Count,
            SourceSortArg::Outlet => SourceSort::Outlet,
        }
    }
}
