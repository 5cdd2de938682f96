use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Index into the node arena. Stable for the lifetime of one graph instance.
pub type NodeId = usize;

/// Classification of a graph vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Room,
    Entrance,
    Junction,
}

/// Classification of a connector between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Hallway,
    Door,
    Stairs,
    Elevator,
    Outdoor,
    BuildingEntrance,
}

/// Direction of travel along an edge, used for step phrasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionHint {
    #[default]
    Straight,
    Left,
    Right,
    Up,
    Down,
}

impl DirectionHint {
    /// Hint carried by the return edge of a bidirectional connector.
    pub fn reversed(self) -> Self {
        match self {
            DirectionHint::Straight => DirectionHint::Straight,
            DirectionHint::Left => DirectionHint::Right,
            DirectionHint::Right => DirectionHint::Left,
            DirectionHint::Up => DirectionHint::Down,
            DirectionHint::Down => DirectionHint::Up,
        }
    }
}

/// A graph vertex: a room, a building entrance, or a connector junction.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    /// Stable external key, e.g. `A-R101`. Unique across the graph.
    pub key: String,
    /// Building shorthand; absent for purely outdoor junctions.
    pub building: Option<String>,
    pub kind: NodeKind,
    /// Floor the node sits on; only meaningful for same-building reasoning.
    pub floor: i16,
    /// False only for malformed data; a wheelchair can occupy any normal node.
    pub accessible: bool,
    /// Room identifier within the building, when `kind` is `Room`.
    pub room: Option<String>,
}

/// A directed connection between two nodes. Bidirectional connectors in the
/// payload expand to two of these at build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Weight used when optimizing for shortest physical distance.
    pub distance_cost: f64,
    /// Weight used when optimizing for simplest wayfinding.
    pub complexity_cost: f64,
    /// False for stairs-only connectors a wheelchair cannot traverse.
    pub accessible: bool,
    pub kind: EdgeKind,
    pub hint: DirectionHint,
}

/// Immutable campus connectivity graph.
///
/// Nodes live in a flat arena indexed by [`NodeId`]; adjacency lists store
/// ids rather than references, so the structure has no ownership cycles.
/// Built once by the loader and never mutated afterwards, which makes shared
/// read access from concurrent queries safe without locking.
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    nodes: Vec<Node>,
    adjacency: Vec<Vec<Edge>>,
    key_to_id: HashMap<String, NodeId>,
    rooms: HashMap<(String, String), NodeId>,
    entrances: HashMap<String, Vec<NodeId>>,
    buildings: Vec<String>,
}

impl CampusGraph {
    pub(crate) fn from_parts(
        nodes: Vec<Node>,
        adjacency: Vec<Vec<Edge>>,
        key_to_id: HashMap<String, NodeId>,
        rooms: HashMap<(String, String), NodeId>,
        entrances: HashMap<String, Vec<NodeId>>,
        mut buildings: Vec<String>,
    ) -> Self {
        buildings.sort();
        buildings.dedup();
        Self {
            nodes,
            adjacency,
            key_to_id,
            rooms,
            entrances,
            buildings,
        }
    }

    /// Lookup a node by arena id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Outbound edges for a node. Empty for unknown ids.
    pub fn neighbors(&self, id: NodeId) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Lookup a node id by its stable external key.
    pub fn node_id_by_key(&self, key: &str) -> Option<NodeId> {
        self.key_to_id.get(key).copied()
    }

    /// Lookup the node for a specific room within a building.
    pub fn room_node(&self, building: &str, room: &str) -> Option<NodeId> {
        self.rooms
            .get(&(building.to_string(), room.to_string()))
            .copied()
    }

    /// Entrance nodes for a building, sorted by id at build time.
    pub fn entrances(&self, building: &str) -> &[NodeId] {
        self.entrances
            .get(building)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether a building shorthand appears anywhere in the graph.
    pub fn has_building(&self, building: &str) -> bool {
        self.buildings.iter().any(|b| b == building)
    }

    /// All known building shorthands, sorted.
    pub fn building_codes(&self) -> &[String] {
        &self.buildings
    }

    /// Number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Building shorthands closest to `shorthand` by Jaro-Winkler similarity.
    pub fn fuzzy_building_matches(&self, shorthand: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &String)> = self
            .buildings
            .iter()
            .map(|candidate| {
                (
                    strsim::jaro_winkler(
                        &shorthand.to_uppercase(),
                        &candidate.to_uppercase(),
                    ),
                    candidate,
                )
            })
            .filter(|(score, _)| *score > 0.6)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.clone())
            .collect()
    }
}
