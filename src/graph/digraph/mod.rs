//! A directed graph keyed by vertex identifier.
//!
//! `Digraph<V>` owns its vertices; each vertex owns its outgoing edges, and
//! edges point at their target by identifier. The graph keeps the in/out
//! degree counters of every decoration in step with edge insertion and
//! removal.
//!
//! Removing a vertex clears the vertex's own outgoing edges but leaves edges
//! from other vertices pointing at it in place. Such dangling edges are
//! skipped by every algorithm and can be dropped with
//! [`Digraph::prune_dangling_edges`]. Re-inserting a vertex under the same
//! identifier makes them live again.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(\log n)\) | |
//! | `remove_vertex` | \(O(d \log n)\) | `d` = out-degree of the removed vertex |
//! | `add_edge` / `remove_edge` | \(O(\log n + \log d)\) | |
//! | `bfs` / `dfs` | \(O(n + m)\) | Resets all decorations first |
//! | `shortest_path_dijkstra` / `a_star` | \(O(n^2 \log n + m)\) | Re-sorts the working set per extraction |
//! | `transpose` | \(O((n + m) \log n)\) | |
//! | `topological_sort` | \(O((n + m) \log n)\) | Kahn's algorithm |
//! | `strongly_connected_components` | \(O((n + m) \log n)\) | Kosaraju |

use std::collections::BTreeMap;

use super::{Edge, GraphError, Path, Result, Uid, Vertex, VertexCollection};

mod invariants;
mod shortest_path;
mod structure;
mod traversal;

#[cfg(test)]
mod tests;

/// A directed graph with payload `V` on every vertex.
#[derive(Debug, Clone)]
pub struct Digraph<V> {
    vertices: VertexCollection<V>,
    /// In-degree owed to identifiers that are currently absent, from edges
    /// left dangling by `remove_vertex`.
    orphaned_in_degree: BTreeMap<Uid, u64>,
    /// Outcome of the most recent `dfs`.
    acyclic: bool,
}

impl<V> Digraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: VertexCollection::new(),
            orphaned_in_degree: BTreeMap::new(),
            acyclic: true,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges, dangling ones included.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.edges().len()).sum()
    }

    /// Returns `true` if a vertex with `id` exists.
    pub fn contains(&self, id: Uid) -> bool {
        self.vertices.contains(&id)
    }

    /// The vertex collection.
    pub fn vertex_collection(&self) -> &VertexCollection<V> {
        &self.vertices
    }

    /// Iterates vertices in identifier order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V>> + '_ {
        self.vertices.iter()
    }

    /// Identifiers in ascending order.
    pub fn vertex_ids(&self) -> Vec<Uid> {
        self.vertices.keys().copied().collect()
    }

    /// Looks up a vertex.
    pub fn vertex(&self, id: Uid) -> Option<&Vertex<V>> {
        self.vertices.get(&id)
    }

    /// Looks up a vertex mutably. Only the payload can be changed through it.
    pub fn vertex_mut(&mut self, id: Uid) -> Option<&mut Vertex<V>> {
        self.vertices.get_mut(&id)
    }

    /// The first vertex, in identifier order, satisfying `predicate`.
    pub fn find_vertex<F>(&self, predicate: F) -> Option<&Vertex<V>>
    where
        F: FnMut(&Vertex<V>) -> bool,
    {
        self.vertices.find(predicate)
    }

    /// Every vertex satisfying `predicate`, in identifier order.
    pub fn vertices_where<F>(&self, mut predicate: F) -> Vec<&Vertex<V>>
    where
        F: FnMut(&Vertex<V>) -> bool,
    {
        self.vertices.iter().filter(|v| predicate(*v)).collect()
    }

    /// Adds a vertex holding `value`.
    ///
    /// # Errors
    /// [`GraphError::DuplicateKey`] if `id` is already present.
    pub fn add_vertex(&mut self, id: Uid, value: V) -> Result<&mut Self> {
        self.insert_vertex(Vertex::new(id, value))
    }

    /// Inserts a detached vertex, such as one returned by `remove_vertex`.
    ///
    /// The vertex's degree counters are recomputed for this graph.
    ///
    /// # Errors
    /// [`GraphError::DuplicateKey`] if its identifier is already present.
    pub fn insert_vertex(&mut self, mut vertex: Vertex<V>) -> Result<&mut Self> {
        let id = vertex.id();
        if self.vertices.contains(&id) {
            return Err(GraphError::DuplicateKey(id));
        }
        // Outgoing edges of a foreign vertex are meaningless here.
        vertex.edges_mut().clear();
        let owed = self.orphaned_in_degree.remove(&id).unwrap_or(0);
        let decoration = vertex.decoration_mut();
        decoration.reset();
        decoration.set_in_degree(owed);
        decoration.set_out_degree(0);
        if self.vertices.try_insert(vertex).is_err() {
            return Err(GraphError::DuplicateKey(id));
        }
        Ok(self)
    }

    /// Removes a vertex and clears its outgoing edges.
    ///
    /// Edges from other vertices into the removed one are left in place.
    pub fn remove_vertex(&mut self, id: Uid) -> Option<Vertex<V>> {
        let mut vertex = self.vertices.remove(&id)?;
        let edges: Vec<Edge> = vertex.edges_mut().drain().collect();
        for edge in edges {
            if edge.target() == id {
                vertex.decoration_mut().dec_in_degree();
            } else {
                self.release_in_degree(edge.target());
            }
        }
        vertex.decoration_mut().set_out_degree(0);

        let owed = vertex.decoration().in_degree();
        if owed > 0 {
            self.orphaned_in_degree.insert(id, owed);
        }
        graph_debug!(vertex = %id, dangling_in = owed, "removed vertex");
        Some(vertex)
    }

    /// Removes the first vertex, in identifier order, satisfying `predicate`.
    pub fn remove_vertex_where<F>(&mut self, predicate: F) -> Option<Vertex<V>>
    where
        F: FnMut(&Vertex<V>) -> bool,
    {
        let id = self.vertices.find(predicate)?.id();
        self.remove_vertex(id)
    }

    /// Adds the edge `from -> to` with `weight`.
    ///
    /// # Errors
    /// - [`GraphError::MissingVertex`] if either endpoint is absent.
    /// - [`GraphError::DuplicateEdge`] if the edge already exists.
    pub fn add_edge(&mut self, from: Uid, to: Uid, weight: f64) -> Result<&mut Self> {
        if !self.vertices.contains(&to) {
            return Err(GraphError::MissingVertex(to));
        }
        let source = self
            .vertices
            .get_mut(&from)
            .ok_or(GraphError::MissingVertex(from))?;
        if source.edges_mut().try_insert(Edge::new(from, to, weight)).is_err() {
            return Err(GraphError::DuplicateEdge { from, to });
        }
        source.decoration_mut().inc_out_degree();
        if let Some(target) = self.vertices.get_mut(&to) {
            target.decoration_mut().inc_in_degree();
        }
        Ok(self)
    }

    /// Adds the edge `from -> to` with [`Edge::UNSET_WEIGHT`].
    ///
    /// # Errors
    /// See [`Digraph::add_edge`].
    pub fn add_edge_default(&mut self, from: Uid, to: Uid) -> Result<&mut Self> {
        self.add_edge(from, to, Edge::UNSET_WEIGHT)
    }

    /// The edge `from -> to`, if present.
    pub fn edge(&self, from: Uid, to: Uid) -> Option<&Edge> {
        self.vertices.get(&from)?.edge_to(to)
    }

    /// The edge `from -> to` mutably, to change its weight.
    pub fn edge_mut(&mut self, from: Uid, to: Uid) -> Option<&mut Edge> {
        self.vertices.get_mut(&from)?.edges_mut().get_mut(&to)
    }

    /// Removes the edge `from -> to`.
    pub fn remove_edge(&mut self, from: Uid, to: Uid) -> Option<Edge> {
        let source = self.vertices.get_mut(&from)?;
        let edge = source.edges_mut().remove(&to)?;
        source.decoration_mut().dec_out_degree();
        self.release_in_degree(to);
        Some(edge)
    }

    /// Removes the first edge of `from`, in target order, satisfying `predicate`.
    pub fn remove_edge_where<F>(&mut self, from: Uid, predicate: F) -> Option<Edge>
    where
        F: FnMut(&Edge) -> bool,
    {
        let source = self.vertices.get_mut(&from)?;
        let edge = source.edges_mut().remove_where(predicate)?;
        source.decoration_mut().dec_out_degree();
        self.release_in_degree(edge.target());
        Some(edge)
    }

    /// Drops every edge whose target is not in the graph.
    ///
    /// Returns the number of edges removed.
    pub fn prune_dangling_edges(&mut self) -> usize {
        let live: Vec<Uid> = self.vertex_ids();
        let mut removed = 0;
        for vertex in self.vertices.iter_mut() {
            let before = vertex.edges().len();
            vertex
                .edges_mut()
                .retain(|edge| live.binary_search(&edge.target()).is_ok());
            let after = vertex.edges().len();
            removed += before - after;
            vertex.decoration_mut().set_out_degree(after as u64);
        }
        self.orphaned_in_degree.clear();
        graph_debug!(removed, "pruned dangling edges");
        removed
    }

    /// Resets the traversal state of every decoration. Degrees are kept.
    pub fn reset(&mut self) -> &mut Self {
        for vertex in self.vertices.iter_mut() {
            vertex.decoration_mut().reset();
        }
        self
    }

    /// Decrements the in-degree owed to `target`, present or not.
    fn release_in_degree(&mut self, target: Uid) {
        if let Some(vertex) = self.vertices.get_mut(&target) {
            vertex.decoration_mut().dec_in_degree();
        } else if let Some(owed) = self.orphaned_in_degree.get_mut(&target) {
            *owed -= 1;
            if *owed == 0 {
                self.orphaned_in_degree.remove(&target);
            }
        }
    }

    /// Walks ancestor links from `end` back to `start`.
    ///
    /// Returns `None` if the chain breaks before reaching `start`.
    fn trace_path(&self, start: Uid, end: Uid, cost: f64) -> Option<Path> {
        let mut vertices = vec![end];
        let mut current = end;
        while current != start {
            current = self.vertices.get(&current)?.decoration().ancestor()?;
            vertices.push(current);
            if vertices.len() > self.vertices.len() {
                return None;
            }
        }
        Some(Path::new(vertices, cost))
    }

    /// Fails with `MissingVertex` unless `id` is present.
    fn require(&self, id: Uid) -> Result<()> {
        if self.vertices.contains(&id) {
            Ok(())
        } else {
            Err(GraphError::MissingVertex(id))
        }
    }
}

impl<V> Default for Digraph<V> {
    fn default() -> Self {
        Self::new()
    }
}
