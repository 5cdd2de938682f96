use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::campus::{CampusGraph, DirectionHint, Edge, EdgeKind, Node, NodeId, NodeKind};
use crate::error::{Error, Result};

/// Configuration payload describing one campus: buildings, nodes, and the
/// connectors between them. Produced by the external configuration loader
/// and consumed once per session to build a [`CampusGraph`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampusPayload {
    #[serde(default)]
    pub buildings: Vec<BuildingRecord>,
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub connectors: Vec<ConnectorRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingRecord {
    pub shorthand: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Stable external key, unique across the payload.
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    pub kind: NodeKind,
    #[serde(default)]
    pub floor: i16,
    #[serde(default = "default_true")]
    pub accessible: bool,
    /// Room identifier within the building, for `room` nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorRecord {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    /// Physical distance weight. Must be finite and positive.
    pub distance: f64,
    /// Wayfinding complexity weight; defaults to the distance weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<f64>,
    #[serde(default = "default_true")]
    pub accessible: bool,
    #[serde(default)]
    pub direction: DirectionHint,
    /// Most connectors are walkable both ways; the return edge carries the
    /// mirrored direction hint.
    #[serde(default = "default_true")]
    pub bidirectional: bool,
    /// Closed connectors are dropped at build time.
    #[serde(default)]
    pub closed: bool,
}

fn default_true() -> bool {
    true
}

/// Read a campus payload from a JSON file and build the graph.
pub fn load_campus_graph(path: &Path) -> Result<CampusGraph> {
    info!("loading campus payload from {}", path.display());
    let raw = fs::read_to_string(path)?;
    let payload: CampusPayload = serde_json::from_str(&raw)?;
    build_campus_graph(&payload)
}

/// Build a validated, immutable graph from a configuration payload.
///
/// Malformed entries are rejected rather than ignored: connectors referencing
/// undeclared nodes, non-positive distance weights, negative complexity
/// weights, and duplicate node or room identities all fail the build, so a
/// malformed graph is never activated. Accessibility coverage per building is
/// reported as a diagnostic only.
pub fn build_campus_graph(payload: &CampusPayload) -> Result<CampusGraph> {
    let mut nodes: Vec<Node> = Vec::with_capacity(payload.nodes.len());
    let mut key_to_id: HashMap<String, NodeId> = HashMap::new();
    let mut rooms: HashMap<(String, String), NodeId> = HashMap::new();
    let mut entrances: HashMap<String, Vec<NodeId>> = HashMap::new();
    let mut buildings: Vec<String> = payload
        .buildings
        .iter()
        .map(|b| b.shorthand.clone())
        .collect();

    for record in &payload.nodes {
        let id = nodes.len();
        if key_to_id.insert(record.key.clone(), id).is_some() {
            return Err(Error::DuplicateNode {
                key: record.key.clone(),
            });
        }

        if let Some(building) = &record.building {
            buildings.push(building.clone());

            match record.kind {
                NodeKind::Room => {
                    if let Some(room) = &record.room {
                        let identity = (building.clone(), room.clone());
                        if rooms.insert(identity, id).is_some() {
                            return Err(Error::DuplicateRoom {
                                building: building.clone(),
                                room: room.clone(),
                            });
                        }
                    } else {
                        warn!(key = %record.key, "room node has no room identifier");
                    }
                }
                NodeKind::Entrance => {
                    entrances.entry(building.clone()).or_default().push(id);
                }
                NodeKind::Junction => {}
            }
        }

        nodes.push(Node {
            id,
            key: record.key.clone(),
            building: record.building.clone(),
            kind: record.kind,
            floor: record.floor,
            accessible: record.accessible,
            room: record.room.clone(),
        });
    }

    let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); nodes.len()];
    let mut coverage: HashMap<String, (usize, usize)> = HashMap::new();

    for record in &payload.connectors {
        if record.closed {
            debug!(from = %record.from, to = %record.to, "skipping closed connector");
            continue;
        }

        let from = *key_to_id
            .get(&record.from)
            .ok_or_else(|| dangling(record))?;
        let to = *key_to_id.get(&record.to).ok_or_else(|| dangling(record))?;

        if !(record.distance.is_finite() && record.distance > 0.0) {
            return Err(Error::InvalidEdgeWeight {
                from: record.from.clone(),
                to: record.to.clone(),
                cost: record.distance,
            });
        }
        let complexity = record.complexity.unwrap_or(record.distance);
        if !(complexity.is_finite() && complexity >= 0.0) {
            return Err(Error::InvalidEdgeWeight {
                from: record.from.clone(),
                to: record.to.clone(),
                cost: complexity,
            });
        }

        let edge = Edge {
            from,
            to,
            distance_cost: record.distance,
            complexity_cost: complexity,
            accessible: record.accessible,
            kind: record.kind,
            hint: record.direction,
        };
        track_coverage(&mut coverage, &nodes, &edge);
        adjacency[from].push(edge);

        if record.bidirectional {
            let back = Edge {
                from: to,
                to: from,
                hint: record.direction.reversed(),
                ..edge
            };
            track_coverage(&mut coverage, &nodes, &back);
            adjacency[to].push(back);
        }
    }

    report_coverage(&coverage, &entrances, &buildings);

    let graph = CampusGraph::from_parts(nodes, adjacency, key_to_id, rooms, entrances, buildings);
    info!(
        "campus graph built: {} nodes, {} edges, {} buildings",
        graph.node_count(),
        graph.edge_count(),
        graph.building_codes().len()
    );
    Ok(graph)
}

fn dangling(record: &ConnectorRecord) -> Error {
    Error::DanglingEdge {
        from: record.from.clone(),
        to: record.to.clone(),
    }
}

fn track_coverage(coverage: &mut HashMap<String, (usize, usize)>, nodes: &[Node], edge: &Edge) {
    let building = nodes[edge.from]
        .building
        .clone()
        .unwrap_or_else(|| "outdoors".to_string());
    let counts = coverage.entry(building).or_default();
    if edge.accessible {
        counts.0 += 1;
    } else {
        counts.1 += 1;
    }
}

fn report_coverage(
    coverage: &HashMap<String, (usize, usize)>,
    entrances: &HashMap<String, Vec<NodeId>>,
    buildings: &[String],
) {
    for (building, (accessible, inaccessible)) in coverage {
        debug!(
            building = %building,
            accessible_edges = accessible,
            inaccessible_edges = inaccessible,
            "edge accessibility coverage"
        );
    }

    for building in buildings {
        if !entrances.contains_key(building) {
            warn!(
                building = %building,
                "building has no entrance nodes; building-only destinations will not resolve"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_payload() -> CampusPayload {
        serde_json::from_value(serde_json::json!({
            "buildings": [{ "shorthand": "A" }],
            "nodes": [
                { "key": "A-D1", "building": "A", "kind": "entrance", "floor": 1 },
                { "key": "A-H1", "building": "A", "kind": "junction", "floor": 1 },
                { "key": "A-101", "building": "A", "kind": "room", "floor": 1, "room": "101" }
            ],
            "connectors": [
                { "from": "A-D1", "to": "A-H1", "kind": "hallway", "distance": 4.0 },
                { "from": "A-H1", "to": "A-101", "kind": "door", "distance": 1.0 }
            ]
        }))
        .expect("payload parses")
    }

    #[test]
    fn bidirectional_connectors_expand_to_two_edges() {
        let graph = build_campus_graph(&minimal_payload()).expect("graph builds");
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn room_lookup_resolves_after_build() {
        let graph = build_campus_graph(&minimal_payload()).expect("graph builds");
        let id = graph.room_node("A", "101").expect("room present");
        assert_eq!(graph.node(id).unwrap().key, "A-101");
        assert_eq!(graph.entrances("A").len(), 1);
    }

    #[test]
    fn zero_distance_is_rejected() {
        let mut payload = minimal_payload();
        payload.connectors[0].distance = 0.0;
        let error = build_campus_graph(&payload).expect_err("zero weight rejected");
        assert!(matches!(error, Error::InvalidEdgeWeight { .. }));
    }

    #[test]
    fn dangling_connector_is_rejected() {
        let mut payload = minimal_payload();
        payload.connectors[1].to = "A-999".to_string();
        let error = build_campus_graph(&payload).expect_err("dangling edge rejected");
        assert!(matches!(error, Error::DanglingEdge { .. }));
    }

    #[test]
    fn closed_connector_is_dropped() {
        let mut payload = minimal_payload();
        payload.connectors[1].closed = true;
        let graph = build_campus_graph(&payload).expect("graph builds");
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn duplicate_node_key_is_rejected() {
        let mut payload = minimal_payload();
        let mut duplicate = payload.nodes[2].clone();
        duplicate.room = Some("102".to_string());
        payload.nodes.push(duplicate);
        let error = build_campus_graph(&payload).expect_err("duplicate key rejected");
        assert!(matches!(error, Error::DuplicateNode { .. }));
    }
}
