use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::campus::{CampusGraph, DirectionHint, Edge, EdgeKind, NodeId, NodeKind};
use crate::resolve::Destination;
use crate::search::FoundPath;

/// Well-known key for the pseudo-step shown when no usable route exists.
pub const REPORT_STEP_KEY: &str = "report_a_problem";

/// Description key for the report step under an accessibility constraint.
pub const NO_ACCESSIBLE_PATH_KEY: &str = "no_accessible_path_found";

/// Description key for the report step without an accessibility constraint.
pub const NO_PATH_KEY: &str = "no_path_found";

/// Icon hint attached to a step, consumed by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconHint {
    Straight,
    TurnLeft,
    TurnRight,
    Up,
    Down,
    Enter,
    Exit,
    Arrive,
    Report,
}

/// One unit of a rendered direction sequence.
///
/// `description_key` is a lookup token resolved to localized text by the
/// consuming UI; the core never embeds display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Unique within a single result; suitable as a rendering key.
    pub key: String,
    pub description_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconHint>,
}

/// Result of a route computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteResult {
    pub steps: Vec<Step>,
    /// True when no satisfying path was found and the UI should offer a
    /// "report a problem" affordance.
    pub show_report: bool,
}

static STEP_PHRASING: Lazy<HashMap<(EdgeKind, DirectionHint), (&'static str, IconHint)>> =
    Lazy::new(|| {
        use DirectionHint::*;
        use EdgeKind::*;
        use IconHint as I;

        HashMap::from([
            ((Hallway, Straight), ("step_walk_hallway", I::Straight)),
            ((Hallway, Left), ("step_turn_left", I::TurnLeft)),
            ((Hallway, Right), ("step_turn_right", I::TurnRight)),
            ((Door, Straight), ("step_pass_door", I::Straight)),
            ((Door, Left), ("step_door_on_left", I::TurnLeft)),
            ((Door, Right), ("step_door_on_right", I::TurnRight)),
            ((Stairs, Up), ("step_take_stairs_up", I::Up)),
            ((Stairs, Down), ("step_take_stairs_down", I::Down)),
            ((Elevator, Up), ("step_take_elevator_up", I::Up)),
            ((Elevator, Down), ("step_take_elevator_down", I::Down)),
            ((Outdoor, Straight), ("step_follow_path", I::Straight)),
            ((Outdoor, Left), ("step_turn_left_on_path", I::TurnLeft)),
            ((Outdoor, Right), ("step_turn_right_on_path", I::TurnRight)),
        ])
    });

/// One collapsed run of edges rendered as a single step.
#[derive(Debug, Clone, Copy)]
struct Run {
    kind: EdgeKind,
    hint: DirectionHint,
    end: NodeId,
}

/// Merge adjacent edges into runs: two edges join the same run iff they share
/// a `kind`, both hints are `Straight`, and neither changes floor. Turns,
/// kind changes, and floor changes always start a new run. Building-entrance
/// edges never merge, so every boundary crossing is phrased on its own.
fn collapse_runs(graph: &CampusGraph, edges: &[Edge]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for edge in edges {
        let changes_floor = edge_changes_floor(graph, edge);
        if let Some(last) = runs.last_mut() {
            let mergeable = last.kind == edge.kind
                && edge.kind != EdgeKind::BuildingEntrance
                && last.hint == DirectionHint::Straight
                && edge.hint == DirectionHint::Straight
                && !changes_floor;
            if mergeable {
                last.end = edge.to;
                continue;
            }
        }
        runs.push(Run {
            kind: edge.kind,
            hint: edge.hint,
            end: edge.to,
        });
    }
    runs
}

fn edge_changes_floor(graph: &CampusGraph, edge: &Edge) -> bool {
    match (graph.node(edge.from), graph.node(edge.to)) {
        (Some(from), Some(to)) => from.floor != to.floor,
        _ => false,
    }
}

fn node_key(graph: &CampusGraph, id: NodeId) -> String {
    graph
        .node(id)
        .map(|node| node.key.clone())
        .unwrap_or_else(|| id.to_string())
}

/// Phrase one run. Building-entrance runs resolve to enter/exit depending on
/// whether the run crosses from outdoors into a building or the reverse; all
/// other kinds go through the static lookup table.
fn phrase_run(graph: &CampusGraph, run: &Run, previous: NodeId) -> (&'static str, IconHint) {
    if run.kind == EdgeKind::BuildingEntrance {
        let from_building = graph.node(previous).and_then(|n| n.building.as_deref());
        let to_building = graph.node(run.end).and_then(|n| n.building.as_deref());
        return match (from_building, to_building) {
            (None, Some(_)) => ("step_enter_building", IconHint::Enter),
            (Some(_), None) => ("step_exit_building", IconHint::Exit),
            _ => ("step_pass_entrance", IconHint::Enter),
        };
    }

    STEP_PHRASING
        .get(&(run.kind, run.hint))
        .copied()
        .unwrap_or(("step_proceed_straight", IconHint::Straight))
}

/// Convert a winning path into ordered direction steps.
///
/// Pure function of the path and graph: no hidden state, so re-running it on
/// the same edge sequence yields the same collapsed step list. The final step
/// is always a synthetic "arrive" step referencing the destination.
pub fn build_steps(graph: &CampusGraph, path: &FoundPath, goal: &Destination) -> Vec<Step> {
    let mut steps = Vec::new();

    // Leaving a room gets its own phrasing before the first movement step.
    if !path.edges.is_empty() {
        if let Some(source) = graph.node(path.source) {
            if source.kind == NodeKind::Room {
                steps.push(Step {
                    key: format!("exit_room_{}", source.key),
                    description_key: "step_exit_room".to_string(),
                    icon: Some(IconHint::Exit),
                });
            }
        }
    }

    let mut previous = path.source;
    for run in collapse_runs(graph, &path.edges) {
        let (description_key, icon) = phrase_run(graph, &run, previous);
        steps.push(Step {
            key: format!("{}_{}", description_key, node_key(graph, run.end)),
            description_key: description_key.to_string(),
            icon: Some(icon),
        });
        previous = run.end;
    }

    steps.push(arrive_step(goal));
    steps
}

fn arrive_step(goal: &Destination) -> Step {
    let key = match &goal.room {
        Some(room) => format!("arrive_{}_{}", goal.building, room),
        None => format!("arrive_{}", goal.building),
    };
    Step {
        key,
        description_key: "step_arrive_at_destination".to_string(),
        icon: Some(IconHint::Arrive),
    }
}

/// The single pseudo-step emitted when no usable route exists. The
/// description key names the constraint that failed so the UI can phrase the
/// accessible case distinctly.
pub fn report_steps(accessible: bool) -> Vec<Step> {
    let description_key = if accessible {
        NO_ACCESSIBLE_PATH_KEY
    } else {
        NO_PATH_KEY
    };
    vec![Step {
        key: REPORT_STEP_KEY.to_string(),
        description_key: description_key.to_string(),
        icon: Some(IconHint::Report),
    }]
}
