//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use campusguide_lib::{load_campus_graph, CampusGraph};

/// Path to the minimal campus fixture payload.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/minimal_campus.json")
}

/// Load the minimal campus fixture graph.
#[allow(dead_code)]
pub fn fixture_graph() -> CampusGraph {
    load_campus_graph(&fixture_path()).expect("fixture loads")
}
