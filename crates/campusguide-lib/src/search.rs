use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::campus::{CampusGraph, Edge, NodeId, NodeKind};

/// Weight policy applied during path search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutePreference {
    /// Minimize physical distance, using each edge's `distance_cost`.
    #[default]
    Shortest,
    /// Minimize wayfinding complexity, using each edge's `complexity_cost`.
    Simplest,
}

impl fmt::Display for RoutePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RoutePreference::Shortest => "shortest",
            RoutePreference::Simplest => "simplest",
        };
        f.write_str(value)
    }
}

/// Winning path returned by the search: the ordered edges from one start
/// node to one goal node, plus the total weight under the active policy.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundPath {
    pub source: NodeId,
    pub edges: Vec<Edge>,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy)]
struct BestEntry {
    cost: f64,
    hops: u32,
    parent: Option<(NodeId, Edge)>,
}

/// Multi-source, multi-sink Dijkstra over the campus graph.
///
/// Every start node is seeded at cost zero and the search settles nodes until
/// the first goal pops, which is the super-source/super-sink formulation
/// without materializing synthetic vertices. Ties are broken by total cost,
/// then hop count, then smaller node id, so identical inputs always produce
/// identical paths.
///
/// When `accessible` is set, inaccessible edges and edges into inaccessible
/// nodes are excluded from relaxation entirely rather than penalized: no
/// weighting could otherwise guarantee they never appear in a result.
///
/// Returns `None` when the frontier empties before any goal settles. That is
/// the ordinary no-path outcome, not an error.
pub fn find_path(
    graph: &CampusGraph,
    starts: &[NodeId],
    goals: &[NodeId],
    accessible: bool,
    preference: RoutePreference,
) -> Option<FoundPath> {
    if starts.is_empty() || goals.is_empty() {
        return None;
    }

    let goal_set: HashSet<NodeId> = goals.iter().copied().collect();
    let mut best: HashMap<NodeId, BestEntry> = HashMap::new();
    let mut heap = BinaryHeap::new();

    for &start in starts {
        best.insert(
            start,
            BestEntry {
                cost: 0.0,
                hops: 0,
                parent: None,
            },
        );
        heap.push(QueueEntry::new(start, 0.0, 0));
    }

    while let Some(entry) = heap.pop() {
        let settled = match best.get(&entry.node) {
            Some(current) => {
                if is_stale(&entry, current) {
                    continue;
                }
                *current
            }
            None => continue,
        };

        if goal_set.contains(&entry.node) {
            return Some(reconstruct_path(&best, entry.node, settled.cost));
        }

        for edge in graph.neighbors(entry.node) {
            let next = edge.to;
            let Some(target) = graph.node(next) else {
                continue;
            };

            // A path never passes through a room that is not itself a goal.
            if target.kind == NodeKind::Room && !goal_set.contains(&next) {
                continue;
            }

            if accessible && !(edge.accessible && target.accessible) {
                continue;
            }

            let next_cost = settled.cost + edge_weight(edge, preference);
            let next_hops = settled.hops + 1;

            if improves(&best, next, next_cost, next_hops, entry.node) {
                best.insert(
                    next,
                    BestEntry {
                        cost: next_cost,
                        hops: next_hops,
                        parent: Some((entry.node, *edge)),
                    },
                );
                heap.push(QueueEntry::new(next, next_cost, next_hops));
            }
        }
    }

    None
}

fn edge_weight(edge: &Edge, preference: RoutePreference) -> f64 {
    match preference {
        RoutePreference::Shortest => edge.distance_cost,
        RoutePreference::Simplest => edge.complexity_cost,
    }
}

fn is_stale(entry: &QueueEntry, current: &BestEntry) -> bool {
    match entry.cost.0.total_cmp(&current.cost) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => entry.hops > current.hops,
    }
}

fn improves(
    best: &HashMap<NodeId, BestEntry>,
    node: NodeId,
    cost: f64,
    hops: u32,
    parent: NodeId,
) -> bool {
    match best.get(&node) {
        None => true,
        Some(current) => match cost.total_cmp(&current.cost) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => {
                hops < current.hops
                    || (hops == current.hops
                        && current
                            .parent
                            .map_or(false, |(existing, _)| parent < existing))
            }
        },
    }
}

fn reconstruct_path(best: &HashMap<NodeId, BestEntry>, goal: NodeId, cost: f64) -> FoundPath {
    let mut edges = Vec::new();
    let mut current = goal;
    while let Some(entry) = best.get(&current) {
        match entry.parent {
            Some((previous, edge)) => {
                edges.push(edge);
                current = previous;
            }
            None => break,
        }
    }
    edges.reverse();

    FoundPath {
        source: current,
        edges,
        cost,
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: FloatOrd,
    hops: u32,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64, hops: u32) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            hops,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap; equal-cost
        // entries settle by fewer hops, then smaller node id.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.hops.cmp(&self.hops))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_pops_lowest_cost_first() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry::new(1, 5.0, 2));
        heap.push(QueueEntry::new(2, 1.0, 1));
        heap.push(QueueEntry::new(3, 3.0, 1));

        assert_eq!(heap.pop().unwrap().node, 2);
        assert_eq!(heap.pop().unwrap().node, 3);
        assert_eq!(heap.pop().unwrap().node, 1);
    }

    #[test]
    fn queue_breaks_cost_ties_by_hops_then_node_id() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry::new(7, 2.0, 3));
        heap.push(QueueEntry::new(9, 2.0, 1));
        heap.push(QueueEntry::new(4, 2.0, 1));

        assert_eq!(heap.pop().unwrap().node, 4);
        assert_eq!(heap.pop().unwrap().node, 9);
        assert_eq!(heap.pop().unwrap().node, 7);
    }

    #[test]
    fn route_preference_displays_lowercase() {
        assert_eq!(RoutePreference::Shortest.to_string(), "shortest");
        assert_eq!(RoutePreference::Simplest.to_string(), "simplest");
    }
}
