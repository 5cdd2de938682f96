// Test-only helpers for `campusguide-lib` tests and benches.

use crate::campus::{CampusGraph, DirectionHint, EdgeKind, NodeKind};
use crate::loading::{build_campus_graph, BuildingRecord, CampusPayload, ConnectorRecord, NodeRecord};

/// Builder assembling a [`CampusPayload`] for tests with sensible defaults.
#[derive(Debug, Default)]
pub struct CampusPayloadBuilder {
    payload: CampusPayload,
}

impl CampusPayloadBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn building(mut self, shorthand: &str) -> Self {
        self.payload.buildings.push(BuildingRecord {
            shorthand: shorthand.to_string(),
            name: None,
        });
        self
    }

    pub fn entrance(mut self, key: &str, building: &str, floor: i16) -> Self {
        self.payload.nodes.push(NodeRecord {
            key: key.to_string(),
            building: Some(building.to_string()),
            kind: NodeKind::Entrance,
            floor,
            accessible: true,
            room: None,
        });
        self
    }

    pub fn room(mut self, key: &str, building: &str, room: &str, floor: i16) -> Self {
        self.payload.nodes.push(NodeRecord {
            key: key.to_string(),
            building: Some(building.to_string()),
            kind: NodeKind::Room,
            floor,
            accessible: true,
            room: Some(room.to_string()),
        });
        self
    }

    pub fn junction(mut self, key: &str, building: &str, floor: i16) -> Self {
        self.payload.nodes.push(NodeRecord {
            key: key.to_string(),
            building: Some(building.to_string()),
            kind: NodeKind::Junction,
            floor,
            accessible: true,
            room: None,
        });
        self
    }

    /// Outdoor junction with no building affiliation.
    pub fn outdoor_junction(mut self, key: &str) -> Self {
        self.payload.nodes.push(NodeRecord {
            key: key.to_string(),
            building: None,
            kind: NodeKind::Junction,
            floor: 0,
            accessible: true,
            room: None,
        });
        self
    }

    pub fn hallway(self, from: &str, to: &str, distance: f64, direction: DirectionHint) -> Self {
        self.connector(from, to, EdgeKind::Hallway, distance, direction, true)
    }

    pub fn door(self, from: &str, to: &str, distance: f64) -> Self {
        self.connector(
            from,
            to,
            EdgeKind::Door,
            distance,
            DirectionHint::Straight,
            true,
        )
    }

    /// Stairs are never wheelchair-traversable.
    pub fn stairs(self, from: &str, to: &str, distance: f64, direction: DirectionHint) -> Self {
        self.connector(from, to, EdgeKind::Stairs, distance, direction, false)
    }

    pub fn elevator(self, from: &str, to: &str, distance: f64, direction: DirectionHint) -> Self {
        self.connector(from, to, EdgeKind::Elevator, distance, direction, true)
    }

    pub fn outdoor_path(
        self,
        from: &str,
        to: &str,
        distance: f64,
        direction: DirectionHint,
    ) -> Self {
        self.connector(from, to, EdgeKind::Outdoor, distance, direction, true)
    }

    pub fn entrance_edge(self, from: &str, to: &str, distance: f64) -> Self {
        self.connector(
            from,
            to,
            EdgeKind::BuildingEntrance,
            distance,
            DirectionHint::Straight,
            true,
        )
    }

    pub fn connector(
        mut self,
        from: &str,
        to: &str,
        kind: EdgeKind,
        distance: f64,
        direction: DirectionHint,
        accessible: bool,
    ) -> Self {
        self.payload.connectors.push(ConnectorRecord {
            from: from.to_string(),
            to: to.to_string(),
            kind,
            distance,
            complexity: None,
            accessible,
            direction,
            bidirectional: true,
            closed: false,
        });
        self
    }

    /// Override the complexity weight of the most recent connector.
    pub fn complexity(mut self, complexity: f64) -> Self {
        if let Some(last) = self.payload.connectors.last_mut() {
            last.complexity = Some(complexity);
        }
        self
    }

    /// Push a fully customized connector record.
    pub fn raw_connector(mut self, record: ConnectorRecord) -> Self {
        self.payload.connectors.push(record);
        self
    }

    pub fn build(self) -> CampusPayload {
        self.payload
    }

    /// Build the payload and the graph in one go; panics on invalid fixtures.
    pub fn build_graph(self) -> CampusGraph {
        build_campus_graph(&self.payload).expect("test fixture builds a valid graph")
    }
}
