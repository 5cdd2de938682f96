mod common;

use std::io::Write;

use campusguide_lib::{load_campus_graph, Error};

#[test]
fn fixture_payload_builds_expected_graph() {
    let graph = common::fixture_graph();

    assert_eq!(graph.node_count(), 13);
    // Every connector in the fixture is bidirectional.
    assert_eq!(graph.edge_count(), 28);
    assert_eq!(graph.building_codes(), ["A", "B"]);
    assert_eq!(graph.entrances("A").len(), 2);
    assert_eq!(graph.entrances("B").len(), 1);
}

#[test]
fn room_and_key_lookups_agree() {
    let graph = common::fixture_graph();

    let by_room = graph.room_node("A", "101").expect("room resolves");
    let by_key = graph.node_id_by_key("A-101").expect("key resolves");
    assert_eq!(by_room, by_key);

    let node = graph.node(by_room).expect("node exists");
    assert_eq!(node.building.as_deref(), Some("A"));
    assert_eq!(node.floor, 1);
}

#[test]
fn outdoor_junctions_carry_no_building() {
    let graph = common::fixture_graph();
    let id = graph.node_id_by_key("OUT-1").expect("outdoor node present");
    assert!(graph.node(id).unwrap().building.is_none());
}

#[test]
fn missing_payload_file_is_an_io_error() {
    let error = load_campus_graph(std::path::Path::new("/nonexistent/campus.json"))
        .expect_err("file is absent");
    assert!(matches!(error, Error::Io(_)));
}

#[test]
fn malformed_json_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(b"{ not json").expect("write payload");

    let error = load_campus_graph(file.path()).expect_err("payload is malformed");
    assert!(matches!(error, Error::Json(_)));
}
