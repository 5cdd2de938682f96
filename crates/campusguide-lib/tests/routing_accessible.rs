mod common;

use campusguide_lib::{
    compute_route, Destination, DirectionHint, EdgeKind, RouteOptions, NO_ACCESSIBLE_PATH_KEY,
    REPORT_STEP_KEY,
};
use campusguide_lib::test_helpers::CampusPayloadBuilder;

#[test]
fn unconstrained_route_takes_the_stairs() {
    let graph = common::fixture_graph();

    let result = compute_route(
        &graph,
        &Destination::room("A", "101"),
        &Destination::room("A", "201"),
        &RouteOptions::new(false, true),
    );

    assert!(!result.show_report);
    assert!(result
        .steps
        .iter()
        .any(|step| step.description_key == "step_take_stairs_up"));
}

#[test]
fn accessible_route_takes_the_elevator() {
    let graph = common::fixture_graph();

    let result = compute_route(
        &graph,
        &Destination::room("A", "101"),
        &Destination::room("A", "201"),
        &RouteOptions::new(true, true),
    );

    assert!(!result.show_report);
    assert!(result
        .steps
        .iter()
        .any(|step| step.description_key == "step_take_elevator_up"));
    assert!(!result
        .steps
        .iter()
        .any(|step| step.description_key == "step_take_stairs_up"));
}

#[test]
fn stairs_only_floor_reports_no_accessible_path() {
    let graph = CampusPayloadBuilder::new()
        .building("X")
        .entrance("X-D1", "X", 1)
        .junction("X-V2", "X", 2)
        .room("X-201", "X", "201", 2)
        .stairs("X-D1", "X-V2", 2.0, DirectionHint::Up)
        .door("X-V2", "X-201", 1.0)
        .build_graph();

    let result = compute_route(
        &graph,
        &Destination::building("X"),
        &Destination::room("X", "201"),
        &RouteOptions::new(true, true),
    );

    assert!(result.show_report);
    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.steps[0].key, REPORT_STEP_KEY);
    assert_eq!(result.steps[0].description_key, NO_ACCESSIBLE_PATH_KEY);
}

#[test]
fn inaccessible_node_blocks_accessible_routes() {
    // The only interior junction is flagged inaccessible; a wheelchair query
    // must fail even though every edge is individually traversable.
    let mut payload = CampusPayloadBuilder::new()
        .building("X")
        .entrance("X-D1", "X", 1)
        .junction("X-J1", "X", 1)
        .room("X-101", "X", "101", 1)
        .hallway("X-D1", "X-J1", 2.0, DirectionHint::Straight)
        .door("X-J1", "X-101", 1.0)
        .build();
    payload
        .nodes
        .iter_mut()
        .find(|node| node.key == "X-J1")
        .unwrap()
        .accessible = false;
    let graph = campusguide_lib::build_campus_graph(&payload).unwrap();

    let accessible = compute_route(
        &graph,
        &Destination::building("X"),
        &Destination::room("X", "101"),
        &RouteOptions::new(true, true),
    );
    assert!(accessible.show_report);

    let unconstrained = compute_route(
        &graph,
        &Destination::building("X"),
        &Destination::room("X", "101"),
        &RouteOptions::new(false, true),
    );
    assert!(!unconstrained.show_report);
}

#[test]
fn inaccessible_edges_survive_in_the_unconstrained_graph() {
    let graph = common::fixture_graph();
    let stairs = graph
        .neighbors(graph.node_id_by_key("A-H1").unwrap())
        .iter()
        .find(|edge| edge.kind == EdgeKind::Stairs)
        .copied()
        .expect("fixture has stairs");
    assert!(!stairs.accessible);
}
