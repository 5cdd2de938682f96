//! Campus guide route-finding core.
//!
//! This crate loads a campus connectivity payload into an immutable graph,
//! resolves building/room destinations to graph nodes, runs constrained
//! shortest-path search, and turns the winning path into localizable
//! direction steps. Higher-level consumers (UI screens, the CLI) should only
//! depend on the types exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod campus;
pub mod error;
pub mod loading;
pub mod resolve;
pub mod route;
pub mod search;
pub mod steps;
pub mod test_helpers;

pub use campus::{CampusGraph, DirectionHint, Edge, EdgeKind, Node, NodeId, NodeKind};
pub use error::{Error, Result};
pub use loading::{build_campus_graph, load_campus_graph, CampusPayload};
pub use resolve::{resolve_destination, Destination};
pub use route::{compute_route, RouteOptions, RouteService};
pub use search::{find_path, FoundPath, RoutePreference};
pub use steps::{
    build_steps, report_steps, IconHint, RouteResult, Step, NO_ACCESSIBLE_PATH_KEY, NO_PATH_KEY,
    REPORT_STEP_KEY,
};
