use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use crate::campus::CampusGraph;
use crate::error::{Error, Result};
use crate::resolve::{resolve_destination, Destination};
use crate::search::{find_path, RoutePreference};
use crate::steps::{build_steps, report_steps, RouteResult};

/// Preferences applied to a single route query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Restrict the route to edges a wheelchair can traverse.
    pub accessible: bool,
    pub preference: RoutePreference,
}

impl RouteOptions {
    /// Build options from the caller-facing boolean pair.
    pub fn new(accessible: bool, shortest_route: bool) -> Self {
        Self {
            accessible,
            preference: if shortest_route {
                RoutePreference::Shortest
            } else {
                RoutePreference::Simplest
            },
        }
    }
}

/// Compute navigation steps between two destinations against one graph
/// snapshot.
///
/// Pure function of its inputs: resolution failures and no-path outcomes are
/// folded into `show_report = true` rather than surfaced as errors, because
/// failing to find a route is an anticipated user scenario, not a defect.
pub fn compute_route(
    graph: &CampusGraph,
    start: &Destination,
    goal: &Destination,
    options: &RouteOptions,
) -> RouteResult {
    let starts = match resolve_destination(graph, start) {
        Ok(nodes) => nodes,
        Err(error) => {
            warn!(destination = %start, %error, "start destination could not be resolved");
            return report_result(options);
        }
    };
    let goals = match resolve_destination(graph, goal) {
        Ok(nodes) => nodes,
        Err(error) => {
            warn!(destination = %goal, %error, "goal destination could not be resolved");
            return report_result(options);
        }
    };

    match find_path(graph, &starts, &goals, options.accessible, options.preference) {
        Some(path) => RouteResult {
            steps: build_steps(graph, &path, goal),
            show_report: false,
        },
        None => {
            let detail = Error::NoPath {
                accessible: options.accessible,
                preference: options.preference,
            };
            info!(start = %start, goal = %goal, "{detail}");
            report_result(options)
        }
    }
}

fn report_result(options: &RouteOptions) -> RouteResult {
    RouteResult {
        steps: report_steps(options.accessible),
        show_report: true,
    }
}

/// Query façade holding the current campus graph snapshot.
///
/// The graph is installed once per session and replaced atomically on
/// configuration reload; queries run against the `Arc` snapshot they grabbed,
/// so an in-flight query is never affected by a rebuild. Queries issued
/// before the first install fail with [`Error::GraphNotReady`], which callers
/// should treat as transient rather than as a routing failure.
#[derive(Debug, Default)]
pub struct RouteService {
    current: RwLock<Option<Arc<CampusGraph>>>,
}

impl RouteService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active graph snapshot for subsequent queries.
    pub fn install(&self, graph: Arc<CampusGraph>) {
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(graph);
    }

    /// Grab the current graph snapshot.
    pub fn snapshot(&self) -> Result<Arc<CampusGraph>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(Error::GraphNotReady)
    }

    pub fn is_ready(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Public query contract: compute directions between two destinations.
    ///
    /// Only [`Error::GraphNotReady`] escapes as `Err`; every ordinary "no
    /// route" condition is reported through the result's `show_report` flag.
    pub fn compute_route(
        &self,
        start: &Destination,
        goal: &Destination,
        options: &RouteOptions,
    ) -> Result<RouteResult> {
        let graph = self.snapshot()?;
        Ok(compute_route(&graph, start, goal, options))
    }
}
