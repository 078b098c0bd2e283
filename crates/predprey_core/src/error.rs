//! Error taxonomy for the simulation core.

use predprey_data::AgentKind;
use thiserror::Error;

/// Faults that abort a run. No step is retried and no partial step is
/// recovered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A repulsion term was requested between two agents at the same
    /// coordinates, where no direction is defined.
    #[error("degenerate geometry: {kind} {id} coincides with {other_kind} {other_id}")]
    DegenerateGeometry {
        kind: AgentKind,
        id: u64,
        other_kind: AgentKind,
        other_id: u64,
    },
}

/// Result alias for scheduler and behaviour operations.
pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_geometry_display() {
        let err = SimError::DegenerateGeometry {
            kind: AgentKind::Prey,
            id: 3,
            other_kind: AgentKind::Predator,
            other_id: 7,
        };
        assert_eq!(
            err.to_string(),
            "degenerate geometry: prey 3 coincides with predator 7"
        );
    }
}
