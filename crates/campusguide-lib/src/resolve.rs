use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::campus::{CampusGraph, NodeId};
use crate::error::{Error, Result};

/// Number of fuzzy suggestions attached to an unknown-building error.
const MAX_BUILDING_SUGGESTIONS: usize = 3;

/// A building shorthand plus optional room identifier.
///
/// Identifies either a whole building (no room) or a specific room within
/// it. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destination {
    pub building: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl Destination {
    /// Destination for a whole building.
    pub fn building(shorthand: impl Into<String>) -> Self {
        Self {
            building: shorthand.into(),
            room: None,
        }
    }

    /// Destination for a specific room within a building.
    pub fn room(shorthand: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            building: shorthand.into(),
            room: Some(room.into()),
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.room {
            Some(room) => write!(f, "{} {}", self.building, room),
            None => f.write_str(&self.building),
        }
    }
}

/// Resolve a destination to its candidate graph nodes.
///
/// A room destination resolves to the single matching room node. A room the
/// graph has no presence for degrades to building-only resolution rather
/// than failing hard. A building-only destination resolves to every entrance
/// node of the building; the search treats the set as a virtual single
/// source or sink, so any entrance is acceptable.
pub fn resolve_destination(graph: &CampusGraph, destination: &Destination) -> Result<Vec<NodeId>> {
    if !graph.has_building(&destination.building) {
        return Err(Error::UnknownBuilding {
            shorthand: destination.building.clone(),
            suggestions: graph
                .fuzzy_building_matches(&destination.building, MAX_BUILDING_SUGGESTIONS),
        });
    }

    if let Some(room) = &destination.room {
        if let Some(id) = graph.room_node(&destination.building, room) {
            return Ok(vec![id]);
        }
        debug!(
            building = %destination.building,
            room = %room,
            "room has no graph presence; falling back to building entrances"
        );
    }

    let entrances = graph.entrances(&destination.building);
    if entrances.is_empty() {
        return Err(match &destination.room {
            Some(room) => Error::UnknownRoom {
                building: destination.building.clone(),
                room: room.clone(),
            },
            None => Error::MissingEntrance {
                building: destination.building.clone(),
            },
        });
    }

    Ok(entrances.to_vec())
}
