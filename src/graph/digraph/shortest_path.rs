//! Weighted shortest paths: Dijkstra, A* and weighted A*.
//!
//! All three share one best-first loop. The working set holds every vertex
//! tagged with its tentative priority (`f64::MAX` = not reached, the source
//! starts at `0`). Each round the set is heap-sorted and its minimum is
//! extracted, so an extraction costs \(O(n \log n)\).
//!
//! The priority of a vertex `v` reached from `u` is
//! `g(u) + w(u, v) + epsilon * h(v, end)`, where `g` is the accumulated cost.
//! With `h = 0` or `epsilon = 0` this is Dijkstra; with `epsilon = 1` it is
//! A*. A heuristic value that makes the priority `NaN` leaves that vertex
//! unreached.
//!
//! Edges carrying [`Edge::UNSET_WEIGHT`](crate::Edge::UNSET_WEIGHT) are never
//! traversed.

use std::collections::BTreeMap;

use super::Digraph;
use crate::graph::{heuristic, GraphError, Path, Result, Uid, Vertex, VertexState};
use crate::sort::{heap_sort, SortOrder, Weighted};

/// A working-set entry.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    id: Uid,
    priority: f64,
}

impl Weighted for Candidate {
    fn weight(&self) -> f64 {
        self.priority
    }
}

impl<V> Digraph<V> {
    /// Dijkstra's shortest path from `start` to `end`.
    ///
    /// Returns `Ok(None)` when `end` is unreachable.
    ///
    /// # Errors
    /// - [`GraphError::MissingVertex`] if either endpoint is absent.
    /// - [`GraphError::InvalidWeight`] if any edge weight is negative or `NaN`.
    pub fn shortest_path_dijkstra(&mut self, start: Uid, end: Uid) -> Result<Option<Path>> {
        self.best_first(start, end, heuristic::zero, 1.0)
    }

    /// A* search from `start` to `end` guided by `heuristic`.
    ///
    /// Pass [`heuristic::zero`] to get Dijkstra's behaviour.
    ///
    /// # Errors
    /// See [`Digraph::shortest_path_dijkstra`].
    pub fn a_star<H>(&mut self, start: Uid, end: Uid, heuristic: H) -> Result<Option<Path>>
    where
        H: FnMut(&Vertex<V>, &Vertex<V>) -> f64,
    {
        self.best_first(start, end, heuristic, 1.0)
    }

    /// Weighted A*: the heuristic term is scaled by `epsilon`.
    ///
    /// `epsilon = 1` is plain A*; larger values expand fewer vertices at the
    /// price of optimality (the result costs at most `epsilon` times the
    /// optimum for an admissible heuristic). `epsilon = 0` ignores the
    /// heuristic and searches like Dijkstra, even if it returns infinity.
    ///
    /// # Errors
    /// - [`GraphError::InvalidEpsilon`] if `epsilon` is negative, infinite or `NaN`.
    /// - Otherwise see [`Digraph::shortest_path_dijkstra`].
    pub fn weighted_a_star<H>(
        &mut self,
        start: Uid,
        end: Uid,
        heuristic: H,
        epsilon: f64,
    ) -> Result<Option<Path>>
    where
        H: FnMut(&Vertex<V>, &Vertex<V>) -> f64,
    {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(GraphError::InvalidEpsilon(epsilon));
        }
        self.best_first(start, end, heuristic, epsilon)
    }

    fn best_first<H>(
        &mut self,
        start: Uid,
        end: Uid,
        mut heuristic: H,
        epsilon: f64,
    ) -> Result<Option<Path>>
    where
        H: FnMut(&Vertex<V>, &Vertex<V>) -> f64,
    {
        self.require(start)?;
        self.require(end)?;
        self.check_weights()?;
        self.reset();
        graph_trace!(%start, %end, epsilon, "best-first search start");

        let mut cost: BTreeMap<Uid, f64> = BTreeMap::new();
        let mut priority: BTreeMap<Uid, f64> = self
            .vertices
            .keys()
            .map(|&id| (id, f64::MAX))
            .collect();
        priority.insert(start, 0.0);
        cost.insert(start, 0.0);
        if let Some(source) = self.vertices.get_mut(&start) {
            let decoration = source.decoration_mut();
            decoration.set_state(VertexState::Visited);
            decoration.set_distance(0);
        }

        let mut open: Vec<Candidate> = priority
            .iter()
            .map(|(&id, &key)| Candidate { id, priority: key })
            .collect();

        loop {
            for candidate in &mut open {
                candidate.priority = priority.get(&candidate.id).copied().unwrap_or(f64::MAX);
            }
            // Descending, so the minimum sits at the end.
            heap_sort(&mut open, SortOrder::Descending);
            let Some(current) = open.pop() else {
                break;
            };
            if current.priority >= f64::MAX {
                break;
            }

            let u = current.id;
            let g_u = cost.get(&u).copied().unwrap_or(f64::MAX);
            let Some(vertex) = self.vertices.get_mut(&u) else {
                continue;
            };
            vertex.decoration_mut().set_state(VertexState::Closed);
            if u == end {
                graph_debug!(%start, %end, cost = g_u, "best-first search reached target");
                return Ok(self.trace_path(start, end, g_u));
            }

            let edges: Vec<(Uid, f64)> = vertex
                .edges()
                .iter()
                .map(|edge| (edge.target(), edge.weight()))
                .collect();

            for (v, weight) in edges {
                let g_v = g_u + weight;
                if g_v >= f64::MAX {
                    continue;
                }
                let (Some(next), Some(target)) = (self.vertices.get(&v), self.vertices.get(&end))
                else {
                    continue;
                };
                if next.decoration().state() == VertexState::Closed {
                    continue;
                }
                // `0 * inf` is NaN, so a zero factor drops the term entirely.
                let estimate = if epsilon == 0.0 {
                    0.0
                } else {
                    epsilon * heuristic(next, target)
                };
                let f_v = g_v + estimate;
                // A NaN priority never orders; treat the vertex as not reached.
                if f_v.is_nan() || f_v >= priority.get(&v).copied().unwrap_or(f64::MAX) {
                    continue;
                }

                priority.insert(v, f_v);
                cost.insert(v, g_v);
                if let Some(next) = self.vertices.get_mut(&v) {
                    let decoration = next.decoration_mut();
                    decoration.set_state(VertexState::Visited);
                    decoration.set_ancestor(Some(u));
                    decoration.set_distance(saturating_distance(g_v));
                }
            }
        }

        graph_debug!(%start, %end, "best-first search: no path");
        Ok(None)
    }

    /// Rejects negative and `NaN` weights.
    fn check_weights(&self) -> Result<()> {
        for vertex in self.vertices.iter() {
            for edge in vertex.edges() {
                let weight = edge.weight();
                if weight.is_nan() || weight < 0.0 {
                    return Err(GraphError::InvalidWeight {
                        from: edge.source(),
                        to: edge.target(),
                        weight,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Rounds an accumulated weight up into the decoration's integer distance.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn saturating_distance(cost: f64) -> u64 {
    // Float-to-int `as` casts saturate.
    cost.ceil() as u64
}
