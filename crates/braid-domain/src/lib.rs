//! Braid Domain Layer
//!
//! This crate contains the core data model for Braid's branching
//! timelines. It defines the record types delivered by the fetching
//! collaborator (events, narrative branches, sources, claims), the
//! shared credibility scale, and the trait interface the rest of the
//! engine uses to obtain timeline data.
//!
//! ## Key Concepts
//!
//! - **Event**: a dated occurrence with one or more candidate narratives
//! - **Branch**: one candidate narrative, scored for credibility
//! - **Source**: a published article corroborating an event
//! - **Credibility scale**: the [0, 1] score shared by branches and
//!   sources, with a fixed level/color mapping
//!
//! ## Architecture
//!
//! Pure data and small value-object helpers only. The engine crates
//! (`braid-layout`, `braid-analysis`, `braid-interact`) are stateless
//! transforms over these types; nothing here performs I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod credibility;
pub mod event;
pub mod priority;
pub mod status;
pub mod timeline;
pub mod traits;

// Re-exports for convenience
pub use credibility::{clamp_score, format_percent, hex_color, CredibilityLevel};
pub use event::{Branch, Claim, Event, Source};
pub use priority::Priority;
pub use status::{Progress, TimelineStatus};
pub use timeline::Timeline;
pub use traits::{StatusSnapshot, TimelineProvider};
