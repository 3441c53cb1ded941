use serde::{Deserialize, Serialize};

use super::Uid;

/// A path found by one of the shortest-path searches.
///
/// Vertices are stored the way the searches reconstruct them: from the
/// destination back to the source (`[end, ..., start]`). Use
/// [`Path::forward`] for source-to-destination order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    vertices: Vec<Uid>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(vertices: Vec<Uid>, cost: f64) -> Self {
        debug_assert!(!vertices.is_empty(), "a path holds at least its start");
        Self { vertices, cost }
    }

    /// Vertices from destination to source.
    pub fn vertices(&self) -> &[Uid] {
        &self.vertices
    }

    /// Vertices from source to destination.
    pub fn forward(&self) -> Vec<Uid> {
        self.vertices.iter().rev().copied().collect()
    }

    /// Total cost: hop count for BFS, accumulated weight otherwise.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of vertices on the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the path holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// The source vertex.
    pub fn start(&self) -> Option<Uid> {
        self.vertices.last().copied()
    }

    /// The destination vertex.
    pub fn end(&self) -> Option<Uid> {
        self.vertices.first().copied()
    }
}
