//! Structural algorithms: transpose, topological sort and strongly connected
//! components.

use std::collections::{BTreeMap, BTreeSet};

use super::Digraph;
use crate::graph::{Uid, VertexState};

impl<V> Digraph<V> {
    /// Builds the graph with every edge reversed.
    ///
    /// The result has one payload-free vertex per identifier, fresh
    /// decorations, and `v -> u` with the original weight for each live edge
    /// `u -> v`. Dangling edges are not carried over.
    pub fn transpose(&self) -> Digraph<()> {
        let mut transposed = Digraph::new();
        for id in self.vertices.keys() {
            let _ = transposed.add_vertex(*id, ());
        }
        for vertex in self.vertices.iter() {
            for edge in vertex.edges() {
                // Fails only for dangling edges, which are dropped.
                let _ = transposed.add_edge(edge.target(), edge.source(), edge.weight());
            }
        }
        transposed
    }

    /// Topological order by Kahn's algorithm.
    ///
    /// Works on a copy of the decorations' in-degree counters. Each round
    /// emits every vertex whose remaining in-degree is zero, in identifier
    /// order. Returns `None` if a cycle leaves vertices that never reach zero.
    pub fn topological_sort(&self) -> Option<Vec<Uid>> {
        let mut in_degree: BTreeMap<Uid, u64> = self
            .vertices
            .iter()
            .map(|v| (v.id(), v.decoration().in_degree()))
            .collect();

        let mut frontier: Vec<Uid> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&id, _)| id)
            .collect();
        let mut order = Vec::with_capacity(self.len());

        while !frontier.is_empty() {
            let mut next = BTreeSet::new();
            for &u in &frontier {
                let Some(vertex) = self.vertices.get(&u) else {
                    continue;
                };
                for v in vertex.successors() {
                    if let Some(degree) = in_degree.get_mut(&v) {
                        *degree = degree.saturating_sub(1);
                        if *degree == 0 {
                            next.insert(v);
                        }
                    }
                }
            }
            order.append(&mut frontier);
            frontier = next.into_iter().collect();
        }

        if order.len() == self.len() {
            Some(order)
        } else {
            graph_debug!(
                sorted = order.len(),
                total = self.len(),
                "topological sort: cycle detected"
            );
            None
        }
    }

    /// Strongly connected components by Kosaraju's algorithm.
    ///
    /// Runs [`Digraph::dfs`] for closing times, then explores the transpose
    /// in decreasing closing time; each exploration yields one component.
    ///
    /// Components are built from the transposed vertices: payloads are not
    /// carried, edges point in the reversed direction, and only edges between
    /// members of the same component are kept. Components come out in the
    /// order Kosaraju discovers them.
    pub fn strongly_connected_components(&mut self) -> Vec<Digraph<()>> {
        self.dfs();
        let mut finish_order: Vec<(u64, Uid)> = self
            .vertices
            .iter()
            .map(|v| (v.decoration().closed(), v.id()))
            .collect();
        finish_order.sort_unstable_by(|a, b| b.cmp(a));

        let mut transposed = self.transpose();
        transposed.reset();
        let mut clock = 0;
        let mut components = Vec::new();

        for (_, root) in finish_order {
            let unvisited = transposed
                .vertex(root)
                .is_some_and(|v| v.decoration().state() == VertexState::Unvisited);
            if !unvisited {
                continue;
            }
            let mut members = BTreeSet::new();
            transposed.depth_first_visit(root, &mut clock, |id| {
                members.insert(id);
            });
            components.push(transposed.component(&members));
        }

        graph_debug!(count = components.len(), "strongly connected components");
        components
    }
}

impl Digraph<()> {
    /// The subgraph induced by `members`.
    fn component(&self, members: &BTreeSet<Uid>) -> Digraph<()> {
        let mut component = Digraph::new();
        for &id in members {
            let _ = component.add_vertex(id, ());
        }
        for &id in members {
            let Some(vertex) = self.vertices.get(&id) else {
                continue;
            };
            for edge in vertex.edges() {
                if members.contains(&edge.target()) {
                    let _ = component.add_edge(id, edge.target(), edge.weight());
                }
            }
        }
        component
    }
}
