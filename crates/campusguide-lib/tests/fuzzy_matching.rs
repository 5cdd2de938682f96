mod common;

use campusguide_lib::{resolve_destination, Destination, Error};

#[test]
fn unknown_building_error_suggests_close_matches() {
    let graph = common::fixture_graph();

    let error = resolve_destination(&graph, &Destination::building("AA"))
        .expect_err("no building named AA");

    match &error {
        Error::UnknownBuilding { shorthand, suggestions } => {
            assert_eq!(shorthand, "AA");
            assert!(suggestions.contains(&"A".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(error.to_string().contains("Did you mean"));
}

#[test]
fn hopeless_shorthand_gets_no_suggestions() {
    let graph = common::fixture_graph();

    let error = resolve_destination(&graph, &Destination::building("ZQX-99"))
        .expect_err("no such building");

    match error {
        Error::UnknownBuilding { suggestions, .. } => assert!(suggestions.is_empty()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn lookup_is_case_insensitive_for_suggestions_only() {
    let graph = common::fixture_graph();

    // Exact lookups are literal; "a" is not building "A".
    let error = resolve_destination(&graph, &Destination::building("a"))
        .expect_err("shorthands are matched literally");
    match error {
        Error::UnknownBuilding { suggestions, .. } => {
            assert!(suggestions.contains(&"A".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
