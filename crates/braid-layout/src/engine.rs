//! Layout engine - event list + geometry to renderable scene
//!
//! The pass is deterministic end to end: events are stable-sorted by
//! date (ties keep input order), ranks map linearly onto the plotted
//! height, and branch fans sort by credibility with a stable sort, so
//! identical input always yields an identical scene.

use braid_domain::{clamp_score, format_percent, hex_color, Branch, Event};
use tracing::debug;

use crate::error::LayoutError;
use crate::geometry::{Geometry, BRANCH_SPACING, BRANCH_START_X};
use crate::scene::{Anchor, Origin, Scene, Shape};
use crate::text::{format_date_label, format_time_label, truncate_title};

/// Axis line color
const AXIS_COLOR: &str = "#d1d5db";

/// Vertical offset from an event node down to its branch row
const BRANCH_ROW_OFFSET: f64 = 15.0;

/// One event placed on the timeline axis
///
/// Nodes all sit on the single vertical axis at x = 0; the vertical
/// index is the event's rank after the date sort. Spacing is even by
/// rank rather than by elapsed time, so a dense cluster of same-day
/// events stays readable instead of collapsing visually.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineNode<'a> {
    /// The underlying event
    pub event: &'a Event,
    /// Rank after the date sort, 0-based
    pub index: usize,
    /// Always 0: nodes lie on the axis
    pub x: f64,
    /// Computed vertical position in plot space
    pub y: f64,
    /// True divergence only: more than one branch
    pub has_branches: bool,
}

/// Sort events by date and assign axis positions
///
/// The sort is stable: events with identical timestamps keep their
/// input order across renders. A single event sits at the middle of
/// the axis; otherwise rank 0 maps to the top and rank n-1 to the
/// bottom of the plotted height.
pub fn layout_nodes<'a>(events: &'a [Event], geometry: &Geometry) -> Vec<TimelineNode<'a>> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|e| e.event_date);

    let n = sorted.len();
    let plot_height = geometry.plot_height();

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, event)| {
            let y = if n > 1 {
                index as f64 / (n - 1) as f64 * plot_height
            } else {
                plot_height / 2.0
            };
            TimelineNode {
                event,
                index,
                x: 0.0,
                y,
                has_branches: event.has_divergence(),
            }
        })
        .collect()
}

/// Build the full scene for an event list
///
/// Emits, in draw order: the main axis, per-event date labels, event
/// nodes with title and "priority • sources" captions, and a branch
/// fan for every event with two or more competing narratives. Returns
/// an empty scene for an empty event list.
pub fn layout(events: &[Event], geometry: &Geometry) -> Result<Scene, LayoutError> {
    if geometry.event_count != events.len() {
        return Err(LayoutError::StaleGeometry {
            geometry_events: geometry.event_count,
            layout_events: events.len(),
        });
    }

    let mut scene = Scene::default();
    if events.is_empty() {
        return Ok(scene);
    }

    let nodes = layout_nodes(events, geometry);
    debug!(events = nodes.len(), height = geometry.height, "layout pass");

    // Main vertical axis spanning the plotted height
    scene.push(
        Origin::Chrome,
        Shape::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: geometry.plot_height(),
            stroke: AXIS_COLOR.to_string(),
            stroke_width: 3.0,
        },
    );

    for node in &nodes {
        push_date_labels(&mut scene, node);
        push_event_node(&mut scene, node);
        if node.has_branches {
            push_branch_fan(&mut scene, node);
        }
    }

    Ok(scene)
}

/// Date and time lines to the left of the axis
fn push_date_labels(scene: &mut Scene, node: &TimelineNode<'_>) {
    scene.push(
        Origin::Chrome,
        Shape::Text {
            x: -25.0,
            y: node.y - 5.0,
            content: format_date_label(&node.event.event_date),
            anchor: Anchor::End,
            font_size: 11.0,
            font_weight: 600,
            fill: "#374151".to_string(),
        },
    );
    scene.push(
        Origin::Chrome,
        Shape::Text {
            x: -25.0,
            y: node.y + 8.0,
            content: format_time_label(&node.event.event_date),
            anchor: Anchor::End,
            font_size: 10.0,
            font_weight: 400,
            fill: "#6b7280".to_string(),
        },
    );
}

/// Node circle plus title and caption
fn push_event_node(scene: &mut Scene, node: &TimelineNode<'_>) {
    let event = node.event;
    let origin = Origin::Event(event.id.clone());

    scene.push(
        origin.clone(),
        Shape::Circle {
            cx: node.x,
            cy: node.y,
            r: event.priority.radius(),
            fill: event.priority.color().to_string(),
            stroke: "#fff".to_string(),
            stroke_width: 2.0,
        },
    );

    scene.push(
        origin.clone(),
        Shape::Text {
            x: 20.0,
            y: node.y - 15.0,
            content: truncate_title(&event.title),
            anchor: Anchor::Start,
            font_size: 14.0,
            font_weight: 500,
            fill: "#1f2937".to_string(),
        },
    );

    scene.push(
        origin,
        Shape::Text {
            x: 20.0,
            y: node.y - 2.0,
            content: format!("{} • {} sources", event.priority, event.sources.len()),
            anchor: Anchor::Start,
            font_size: 11.0,
            font_weight: 400,
            fill: "#6b7280".to_string(),
        },
    );
}

/// Branch fan for an event with competing narratives
///
/// Branches sort descending by credibility; the highest-credibility
/// branch connects with a solid elbow and a "Main" label, the rest
/// with a dashed pattern so primary vs alternative reads without
/// relying on color alone.
fn push_branch_fan(scene: &mut Scene, node: &TimelineNode<'_>) {
    let mut branches: Vec<&Branch> = node.event.branches.iter().collect();
    branches.sort_by(|a, b| {
        clamp_score(b.credibility_score)
            .partial_cmp(&clamp_score(a.credibility_score))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (idx, branch) in branches.iter().enumerate() {
        let branch_x = BRANCH_START_X + idx as f64 * BRANCH_SPACING;
        let branch_y = node.y + BRANCH_ROW_OFFSET;
        let color = hex_color(branch.credibility_score);
        let origin = Origin::Branch {
            event_id: node.event.id.clone(),
            branch_id: branch.id.clone(),
        };

        // Elbow connector: down the axis, then out to the branch column
        scene.push(
            origin.clone(),
            Shape::Path {
                d: format!(
                    "M 0,{} L 0,{} L {},{}",
                    node.y, branch_y, branch_x, branch_y
                ),
                stroke: color.to_string(),
                stroke_width: 2.0,
                dash: if idx == 0 { None } else { Some("5,3".to_string()) },
                opacity: 0.6,
            },
        );

        scene.push(
            origin.clone(),
            Shape::Circle {
                cx: branch_x,
                cy: branch_y,
                r: 7.0,
                fill: color.to_string(),
                stroke: "#fff".to_string(),
                stroke_width: 2.0,
            },
        );

        // Credibility percentage pill under the branch node
        let label_width = 36.0;
        scene.push(
            origin.clone(),
            Shape::Rect {
                x: branch_x - label_width / 2.0,
                y: branch_y + 8.0,
                width: label_width,
                height: 16.0,
                rx: 3.0,
                fill: "white".to_string(),
                stroke: color.to_string(),
                stroke_width: 1.5,
            },
        );
        scene.push(
            origin.clone(),
            Shape::Text {
                x: branch_x,
                y: branch_y + 19.0,
                content: format_percent(branch.credibility_score),
                anchor: Anchor::Middle,
                font_size: 11.0,
                font_weight: 700,
                fill: color.to_string(),
            },
        );

        if idx == 0 {
            scene.push(
                origin,
                Shape::Text {
                    x: branch_x,
                    y: branch_y - 10.0,
                    content: "Main".to_string(),
                    anchor: Anchor::Middle,
                    font_size: 9.0,
                    font_weight: 600,
                    fill: "#6b7280".to_string(),
                },
            );
        }
    }

    scene.push(
        Origin::Event(node.event.id.clone()),
        Shape::Text {
            x: 20.0,
            y: node.y + 45.0,
            content: format!("{} narratives", node.event.branches.len()),
            anchor: Anchor::Start,
            font_size: 10.0,
            font_weight: 600,
            fill: "#9ca3af".to_string(),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use braid_domain::Priority;
    use chrono::{TimeZone, Utc};

    fn event(id: &str, day: u32, branch_scores: &[f64]) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            description: None,
            event_date: Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
            priority: Priority::Medium,
            branches: branch_scores
                .iter()
                .enumerate()
                .map(|(i, &score)| Branch {
                    id: format!("{}-b{}", id, i),
                    narrative: format!("Narrative {}", i),
                    credibility_score: score,
                    evidence: None,
                    source_count: 1,
                })
                .collect(),
            sources: vec![],
        }
    }

    fn node_circles(scene: &Scene) -> Vec<(Origin, f64, f64, f64)> {
        scene
            .primitives()
            .iter()
            .filter_map(|p| match (&p.origin, &p.shape) {
                (origin, Shape::Circle { cx, cy, r, .. }) if *origin != Origin::Chrome => {
                    Some((origin.clone(), *cx, *cy, *r))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_events_empty_scene() {
        let geometry = Geometry::compute(&[], 1200.0);
        let scene = layout(&[], &geometry).unwrap();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_stale_geometry_rejected() {
        let events = vec![event("a", 1, &[])];
        let geometry = Geometry::compute(&[], 1200.0);
        let err = layout(&events, &geometry).unwrap_err();
        assert_eq!(
            err,
            LayoutError::StaleGeometry {
                geometry_events: 0,
                layout_events: 1,
            }
        );
    }

    #[test]
    fn test_layout_is_deterministic() {
        let events = vec![
            event("a", 3, &[0.9, 0.4]),
            event("b", 1, &[]),
            event("c", 2, &[0.5, 0.5, 0.2]),
        ];
        let geometry = Geometry::compute(&events, 1200.0);
        let first = layout(&events, &geometry).unwrap();
        let second = layout(&events, &geometry).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_nodes_sorted_by_date_with_increasing_y() {
        let events = vec![event("late", 20, &[]), event("early", 1, &[]), event("mid", 10, &[])];
        let geometry = Geometry::compute(&events, 1200.0);
        let nodes = layout_nodes(&events, &geometry);

        let ids: Vec<_> = nodes.iter().map(|n| n.event.id.as_str()).collect();
        assert_eq!(ids, ["early", "mid", "late"]);
        assert!(nodes[0].y < nodes[1].y);
        assert!(nodes[1].y < nodes[2].y);
        assert_eq!(nodes[0].y, 0.0);
        assert_eq!(nodes[2].y, geometry.plot_height());
        assert!(nodes.iter().all(|n| n.x == 0.0));
    }

    #[test]
    fn test_date_ties_keep_input_order() {
        let events = vec![event("first", 5, &[]), event("second", 5, &[]), event("third", 5, &[])];
        let geometry = Geometry::compute(&events, 1200.0);
        let nodes = layout_nodes(&events, &geometry);
        let ids: Vec<_> = nodes.iter().map(|n| n.event.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn test_single_event_sits_mid_axis() {
        let events = vec![event("only", 1, &[])];
        let geometry = Geometry::compute(&events, 1200.0);
        let nodes = layout_nodes(&events, &geometry);
        assert_eq!(nodes[0].y, geometry.plot_height() / 2.0);
    }

    #[test]
    fn test_single_branch_draws_no_fan() {
        let events = vec![event("a", 1, &[0.9])];
        let geometry = Geometry::compute(&events, 1200.0);
        let scene = layout(&events, &geometry).unwrap();

        let branch_primitives = scene
            .primitives()
            .iter()
            .filter(|p| matches!(p.origin, Origin::Branch { .. }))
            .count();
        assert_eq!(branch_primitives, 0);
    }

    #[test]
    fn test_branch_fan_sorted_descending() {
        let events = vec![event("a", 1, &[0.4, 0.9, 0.6])];
        let geometry = Geometry::compute(&events, 1200.0);
        let scene = layout(&events, &geometry).unwrap();

        let branches: Vec<_> = node_circles(&scene)
            .into_iter()
            .filter(|(origin, ..)| matches!(origin, Origin::Branch { .. }))
            .collect();
        assert_eq!(branches.len(), 3);

        // Highest credibility (0.9, branch b1) occupies the first column
        let (origin, cx, cy, r) = &branches[0];
        assert_eq!(
            *origin,
            Origin::Branch {
                event_id: "a".to_string(),
                branch_id: "a-b1".to_string(),
            }
        );
        assert_eq!(*cx, 120.0);
        assert_eq!(*r, 7.0);
        // Branch row sits 15px below the node
        let nodes = layout_nodes(&events, &geometry);
        assert_eq!(*cy, nodes[0].y + 15.0);

        // Columns advance by the branch spacing
        assert_eq!(branches[1].1, 200.0);
        assert_eq!(branches[2].1, 280.0);
    }

    #[test]
    fn test_main_branch_solid_others_dashed() {
        let events = vec![event("a", 1, &[0.9, 0.4])];
        let geometry = Geometry::compute(&events, 1200.0);
        let scene = layout(&events, &geometry).unwrap();

        let dashes: Vec<_> = scene
            .primitives()
            .iter()
            .filter_map(|p| match &p.shape {
                Shape::Path { dash, .. } => Some(dash.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(dashes, vec![None, Some("5,3".to_string())]);

        let main_labels: Vec<_> = scene
            .primitives()
            .iter()
            .filter(|p| matches!(&p.shape, Shape::Text { content, .. } if content == "Main"))
            .collect();
        assert_eq!(main_labels.len(), 1);
        assert!(matches!(
            &main_labels[0].origin,
            Origin::Branch { branch_id, .. } if branch_id == "a-b0"
        ));
    }

    #[test]
    fn test_branch_count_caption() {
        let events = vec![event("a", 1, &[0.9, 0.4, 0.1])];
        let geometry = Geometry::compute(&events, 1200.0);
        let scene = layout(&events, &geometry).unwrap();

        assert!(scene.primitives().iter().any(
            |p| matches!(&p.shape, Shape::Text { content, .. } if content == "3 narratives")
        ));
    }

    #[test]
    fn test_out_of_range_credibility_never_panics() {
        let events = vec![event("a", 1, &[1.7, -0.3, f64::NAN])];
        let geometry = Geometry::compute(&events, 1200.0);
        let scene = layout(&events, &geometry).unwrap();

        // Three branch circles exist, colored from clamped scores
        let branches = node_circles(&scene)
            .into_iter()
            .filter(|(origin, ..)| matches!(origin, Origin::Branch { .. }))
            .count();
        assert_eq!(branches, 3);
    }

    #[test]
    fn test_priority_radius_on_event_node() {
        let mut critical = event("a", 1, &[]);
        critical.priority = Priority::Critical;
        let events = vec![critical];
        let geometry = Geometry::compute(&events, 1200.0);
        let scene = layout(&events, &geometry).unwrap();

        let (_, _, _, r) = node_circles(&scene)[0];
        assert_eq!(r, 16.0);
    }

    #[test]
    fn test_hit_test_resolves_node_after_layout() {
        let events = vec![event("a", 1, &[]), event("b", 28, &[])];
        let geometry = Geometry::compute(&events, 1200.0);
        let scene = layout(&events, &geometry).unwrap();

        let hit = scene.hit_test(0.0, 0.0, 4.0).unwrap();
        assert_eq!(hit.origin, Origin::Event("a".to_string()));
    }
}
