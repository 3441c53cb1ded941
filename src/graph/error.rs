use core::fmt;

use super::Uid;

/// Errors reported by graph mutation and search.
///
/// Lookups that find nothing are not errors; they return `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphError {
    /// A vertex with this identifier already exists.
    DuplicateKey(Uid),
    /// The source vertex already has an edge to this target.
    DuplicateEdge {
        /// Source of the rejected edge.
        from: Uid,
        /// Target of the rejected edge.
        to: Uid,
    },
    /// An argument names a vertex that is not in the graph.
    MissingVertex(Uid),
    /// A weighted search met a negative or `NaN` edge weight.
    InvalidWeight {
        /// Source of the offending edge.
        from: Uid,
        /// Target of the offending edge.
        to: Uid,
        /// The weight found.
        weight: f64,
    },
    /// Weighted A* was given an inflation factor that is negative, infinite or `NaN`.
    InvalidEpsilon(f64),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(id) => write!(f, "vertex {id} already exists"),
            Self::DuplicateEdge { from, to } => write!(f, "edge {from} -> {to} already exists"),
            Self::MissingVertex(id) => write!(f, "vertex {id} is not in the graph"),
            Self::InvalidWeight { from, to, weight } => {
                write!(f, "edge {from} -> {to} has invalid weight {weight}")
            }
            Self::InvalidEpsilon(epsilon) => {
                write!(f, "heuristic inflation factor {epsilon} must be finite and >= 0")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Result alias for graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
