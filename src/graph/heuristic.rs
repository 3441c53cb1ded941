//! Heuristics for A* searches.
//!
//! A heuristic receives the vertex being scored and the search target and
//! returns an estimate of the remaining cost. Admissible heuristics (never
//! overestimating) keep A* optimal.

use super::Vertex;

/// The zero heuristic. With it A* explores exactly like Dijkstra.
pub fn zero<V>(_vertex: &Vertex<V>, _target: &Vertex<V>) -> f64 {
    0.0
}

/// Absolute difference of the raw identifiers.
///
/// Admissible for graphs laid out on a line where an edge between `a` and
/// `b` costs at least `|a - b|`.
#[allow(clippy::cast_precision_loss)]
pub fn id_distance<V>(vertex: &Vertex<V>, target: &Vertex<V>) -> f64 {
    vertex.id().get().abs_diff(target.id().get()) as f64
}
