//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use braid_analysis::{branch_label, Divergence, SourceGroup};
use braid_domain::{format_percent, CredibilityLevel, Event, StatusSnapshot};
use braid_layout::{format_date_time, truncate_title};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an event listing.
    pub fn format_events(&self, events: &[&Event]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(events)?),
            OutputFormat::Table => self.format_events_table(events),
            OutputFormat::Quiet => Ok(events
                .iter()
                .map(|e| e.id.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_events_table(&self, events: &[&Event]) -> Result<String> {
        if events.is_empty() {
            return Ok(self.colorize("No events found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Date", "Priority", "Title", "Narratives", "Sources"]);

        for event in events {
            builder.push_record([
                format_date_time(&event.event_date),
                event.priority.as_str().to_string(),
                truncate_title(&event.title),
                event.branches.len().to_string(),
                event.sources.len().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format a divergence report.
    pub fn format_divergences(&self, divergences: &[Divergence<'_>]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(divergences)?),
            OutputFormat::Table => self.format_divergences_table(divergences),
            OutputFormat::Quiet => Ok(divergences
                .iter()
                .map(|d| d.event.id.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_divergences_table(&self, divergences: &[Divergence<'_>]) -> Result<String> {
        if divergences.is_empty() {
            return Ok(self.colorize("No narrative divergences detected.", "green"));
        }

        let mut out = String::new();
        for (i, divergence) in divergences.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&self.colorize(&truncate_title(&divergence.event.title), "cyan"));
            out.push_str(&format!(
                "  ({}, divergence {})\n",
                format_date_time(&divergence.event.event_date),
                format_percent(divergence.divergence_score),
            ));

            let total = divergence.branches.len();
            for (j, branch) in divergence.branches.iter().enumerate() {
                out.push_str(&format!(
                    "  {} [{}]: {}\n",
                    branch_label(j, total),
                    format_percent(branch.credibility_score),
                    branch.narrative,
                ));
            }
        }

        Ok(out)
    }

    /// Format a source aggregation report.
    pub fn format_source_groups(&self, groups: &[SourceGroup<'_>]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(groups)?),
            OutputFormat::Table => self.format_source_groups_table(groups),
            OutputFormat::Quiet => Ok(groups
                .iter()
                .map(|g| g.outlet.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_source_groups_table(&self, groups: &[SourceGroup<'_>]) -> Result<String> {
        if groups.is_empty() {
            return Ok(self.colorize("No sources found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Outlet", "Articles", "Avg Credibility", "Level"]);

        for group in groups {
            builder.push_record([
                group.outlet.clone(),
                group.article_count.to_string(),
                format_percent(group.average_credibility),
                CredibilityLevel::from_score(group.average_credibility)
                    .label()
                    .to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format a status snapshot.
    pub fn format_status(&self, snapshot: &StatusSnapshot) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "id": snapshot.id,
                "status": snapshot.status.as_str(),
                "progress": snapshot.progress,
            }))?),
            OutputFormat::Table => {
                let color = match snapshot.status {
                    braid_domain::TimelineStatus::Completed => "green",
                    braid_domain::TimelineStatus::Processing => "yellow",
                    braid_domain::TimelineStatus::Failed => "red",
                };
                let status = self.colorize(snapshot.status.as_str(), color);
                if snapshot.progress.is_empty() {
                    Ok(format!("{}: {}", snapshot.id, status))
                } else {
                    Ok(format!(
                        "{}: {} ({})",
                        snapshot.id, status, snapshot.progress
                    ))
                }
            }
            OutputFormat::Quiet => Ok(snapshot.status.as_str().to_string()),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
