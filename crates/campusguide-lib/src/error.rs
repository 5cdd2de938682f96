use thiserror::Error;

use crate::search::RoutePreference;

/// Convenient result alias for the campus guide library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a destination names a building that is not in the graph.
    #[error("unknown building: {shorthand}{}", format_suggestions(.suggestions))]
    UnknownBuilding {
        shorthand: String,
        suggestions: Vec<String>,
    },

    /// Raised when a room cannot be resolved and no entrance fallback exists.
    #[error("unknown room {room} in building {building}")]
    UnknownRoom { building: String, room: String },

    /// Raised when a building has no entrance nodes to resolve against.
    #[error("building {building} has no entrance nodes")]
    MissingEntrance { building: String },

    /// Raised when no path satisfies the active constraints.
    #[error("no route satisfies the active constraints (accessible: {accessible}, preference: {preference})")]
    NoPath {
        accessible: bool,
        preference: RoutePreference,
    },

    /// Raised when a query is issued before a graph has been installed.
    /// Transient: the caller may retry after initialization.
    #[error("campus graph is not ready yet")]
    GraphNotReady,

    /// Build-time: a connector references a node key that was never declared.
    #[error("connector references unknown node: {from} -> {to}")]
    DanglingEdge { from: String, to: String },

    /// Build-time: a connector carries a non-positive distance or a negative
    /// complexity weight.
    #[error("invalid weight {cost} on connector {from} -> {to}")]
    InvalidEdgeWeight { from: String, to: String, cost: f64 },

    /// Build-time: two node records share the same key.
    #[error("duplicate node key: {key}")]
    DuplicateNode { key: String },

    /// Build-time: two room records share a building/room identity.
    #[error("duplicate room {room} in building {building}")]
    DuplicateRoom { building: String, room: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON payload parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_building_formats_suggestions() {
        let error = Error::UnknownBuilding {
            shorthand: "STX".to_string(),
            suggestions: vec!["STE".to_string()],
        };
        assert_eq!(
            format!("{error}"),
            "unknown building: STX. Did you mean 'STE'?"
        );
    }

    #[test]
    fn no_path_names_active_constraints() {
        let error = Error::NoPath {
            accessible: true,
            preference: RoutePreference::Simplest,
        };
        assert!(format!("{error}").contains("accessible: true"));
        assert!(format!("{error}").contains("simplest"));
    }
}
