//! Braid Analysis
//!
//! Client-side aggregation passes over a timeline's event list:
//!
//! - **Divergence analysis**: ranks events by how much their competing
//!   narratives disagree in credibility
//! - **Source aggregation**: groups sources by publishing outlet with
//!   per-outlet statistics and selectable orderings
//! - **Event listing**: the flat event orderings used by report views
//!
//! All passes are pure, stateless transforms: repeated invocation with
//! identical input yields identical output, and empty results are
//! valid terminal states rather than errors.

#![warn(clippy::all)]

pub mod divergence;
pub mod events;
pub mod sources;

mod error;

pub use divergence::{analyze_divergence, branch_label, Divergence};
pub use error::ParseSortError;
pub use events::{sort_events, EventSort};
pub use sources::{aggregate_sources, SourceGroup, SourceSort};
