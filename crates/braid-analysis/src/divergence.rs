//! Divergence analysis - ranking events by narrative disagreement

use braid_domain::{clamp_score, Branch, Event};
use serde::Serialize;
use tracing::debug;

/// One event with competing narratives, ranked by credibility spread
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Divergence<'a> {
    /// The event in question
    pub event: &'a Event,

    /// The event's branches, sorted descending by credibility
    pub branches: Vec<&'a Branch>,

    /// Spread between the most and least credible branch, in [0, 1]
    pub divergence_score: f64,
}

/// Rank events by how much their branches disagree in credibility
///
/// Keeps only events with more than one branch (a lone narrative is
/// the consensus case, not a divergence). Per event the score is
/// `max - min` of the branch credibility scores, clamped to [0, 1]
/// defensively. The result is stable-sorted descending by score, so
/// the largest disagreement always surfaces first and ties retain
/// input order.
///
/// An empty result means no divergent events, which is a valid state;
/// report surfaces render it as an explicit "no divergence" message.
pub fn analyze_divergence(events: &[Event]) -> Vec<Divergence<'_>> {
    let mut result: Vec<Divergence<'_>> = events
        .iter()
        .filter(|event| event.has_divergence())
        .map(|event| {
            let mut branches: Vec<&Branch> = event.branches.iter().collect();
            branches.sort_by(|a, b| {
                clamp_score(b.credibility_score)
                    .partial_cmp(&clamp_score(a.credibility_score))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let scores = branches.iter().map(|b| clamp_score(b.credibility_score));
            let max = scores.clone().fold(0.0f64, f64::max);
            let min = scores.fold(1.0f64, f64::min);

            Divergence {
                event,
                branches,
                divergence_score: max - min,
            }
        })
        .collect();

    result.sort_by(|a, b| {
        b.divergence_score
            .partial_cmp(&a.divergence_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(divergent = result.len(), total = events.len(), "divergence pass");
    result
}

/// Display label for a branch at a given rank
///
/// The highest-credibility branch is the "Main Narrative"; with
/// exactly two branches the other is "Alternative Narrative",
/// otherwise alternatives are numbered.
pub fn branch_label(index: usize, total_branches: usize) -> String {
    if index == 0 {
        "Main Narrative".to_string()
    } else if total_branches == 2 {
        "Alternative Narrative".to_string()
    } else {
        format!("Alternative {}", index)
    }
}
