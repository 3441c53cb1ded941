//! Breadth-first and depth-first traversals.
//!
//! Every traversal starts by resetting all decorations, then records its
//! working state (state, distance, ancestor, timestamps) on the vertices it
//! reaches. That state stays readable until the next algorithm runs.

use std::collections::{BTreeMap, VecDeque};

use super::Digraph;
use crate::graph::{Path, Result, Uid, Vertex, VertexState};

/// An open DFS frame: the vertex and the successors not yet examined.
struct Frame {
    id: Uid,
    successors: std::vec::IntoIter<Uid>,
}

impl<V> Digraph<V> {
    /// Breadth-first traversal from `start`.
    ///
    /// Distances are hop counts and ancestors form the BFS tree. Returns, in
    /// visitation order, every reached vertex satisfying `predicate`
    /// (`start` included).
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`](crate::GraphError::MissingVertex) if
    /// `start` is absent.
    pub fn bfs<F>(&mut self, start: Uid, mut predicate: F) -> Result<Vec<Uid>>
    where
        F: FnMut(&Vertex<V>) -> bool,
    {
        let mut matched = Vec::new();
        self.breadth_first(start, None, |vertex| {
            if predicate(vertex) {
                matched.push(vertex.id());
            }
        })?;
        Ok(matched)
    }

    /// Breadth-first traversal from `start` returning every reached vertex.
    ///
    /// # Errors
    /// See [`Digraph::bfs`].
    pub fn bfs_all(&mut self, start: Uid) -> Result<Vec<Uid>> {
        self.bfs(start, |_| true)
    }

    /// Hop distance from `start` to every reachable vertex.
    ///
    /// # Errors
    /// See [`Digraph::bfs`].
    pub fn bfs_distances(&mut self, start: Uid) -> Result<BTreeMap<Uid, u64>> {
        let mut distances = BTreeMap::new();
        self.breadth_first(start, None, |vertex| {
            distances.insert(vertex.id(), vertex.decoration().distance());
        })?;
        Ok(distances)
    }

    /// Unweighted shortest path from `start` to `end`.
    ///
    /// Stops as soon as `end` is discovered. Returns `Ok(None)` when `end` is
    /// unreachable; the path's cost is its hop count.
    ///
    /// # Errors
    /// [`GraphError::MissingVertex`](crate::GraphError::MissingVertex) if
    /// either endpoint is absent.
    #[allow(clippy::cast_precision_loss)]
    pub fn shortest_path_bfs(&mut self, start: Uid, end: Uid) -> Result<Option<Path>> {
        self.require(end)?;
        self.breadth_first(start, Some(end), |_| {})?;

        let Some(target) = self.vertex(end) else {
            return Ok(None);
        };
        if target.decoration().state() == VertexState::Unvisited {
            graph_debug!(%start, %end, "bfs: no path");
            return Ok(None);
        }
        let hops = target.decoration().distance();
        Ok(self.trace_path(start, end, hops as f64))
    }

    /// Depth-first traversal of the whole graph.
    ///
    /// Roots are taken in identifier order. Each vertex gets a discovery
    /// timestamp on entry and a closing timestamp on exit from one shared
    /// counter, and its DFS-tree ancestor. Meeting an edge into a vertex that
    /// is still open marks the graph as cyclic; see [`Digraph::last_dfs_acyclic`].
    pub fn dfs(&mut self) -> &mut Self {
        self.reset();
        self.acyclic = true;

        let mut clock = 0;
        for root in self.vertex_ids() {
            let unvisited = self
                .vertex(root)
                .is_some_and(|v| v.decoration().state() == VertexState::Unvisited);
            if unvisited {
                self.depth_first_visit(root, &mut clock, |_| {});
            }
        }
        graph_debug!(acyclic = self.acyclic, "dfs finished");
        self
    }

    /// Whether the most recent [`Digraph::dfs`] found no back edge.
    pub fn last_dfs_acyclic(&self) -> bool {
        self.acyclic
    }

    /// Runs a fresh [`Digraph::dfs`] and reports whether it found no cycle.
    pub fn is_acyclic(&mut self) -> bool {
        self.dfs().acyclic
    }

    /// Runs a fresh [`Digraph::dfs`] and reports whether the DFS forest has
    /// at most one root.
    ///
    /// This approximates connectivity: it is exact for graphs whose vertices
    /// are all forward-reachable from the lowest identifier, and otherwise
    /// depends on identifier order. It is not a weak or strong connectivity
    /// test for general digraphs.
    pub fn is_connected(&mut self) -> bool {
        if self.is_empty() {
            return true;
        }
        self.dfs();
        let roots = self
            .vertices
            .iter()
            .filter(|v| v.decoration().ancestor().is_none())
            .take(2)
            .count();
        roots <= 1
    }

    /// Queue-based BFS core.
    ///
    /// `on_visit` sees each vertex when it is dequeued. With `stop_at`, the
    /// search ends as soon as that vertex is discovered.
    fn breadth_first<F>(&mut self, start: Uid, stop_at: Option<Uid>, mut on_visit: F) -> Result<()>
    where
        F: FnMut(&Vertex<V>),
    {
        self.require(start)?;
        self.reset();
        graph_trace!(%start, "bfs start");

        let mut queue = VecDeque::new();
        if let Some(source) = self.vertices.get_mut(&start) {
            let decoration = source.decoration_mut();
            decoration.set_state(VertexState::Visited);
            decoration.set_distance(0);
            decoration.set_ancestor(None);
        }
        queue.push_back(start);

        if stop_at == Some(start) {
            return Ok(());
        }

        while let Some(u) = queue.pop_front() {
            let Some(vertex) = self.vertices.get(&u) else {
                continue;
            };
            on_visit(vertex);
            let distance = vertex.decoration().distance();
            let successors: Vec<Uid> = vertex.successors().collect();

            for v in successors {
                let Some(next) = self.vertices.get_mut(&v) else {
                    continue;
                };
                let decoration = next.decoration_mut();
                if decoration.state() != VertexState::Unvisited {
                    continue;
                }
                decoration.set_state(VertexState::Visited);
                decoration.set_distance(distance + 1);
                decoration.set_ancestor(Some(u));
                queue.push_back(v);

                if stop_at == Some(v) {
                    graph_trace!(%start, end = %v, "bfs early exit");
                    return Ok(());
                }
            }

            if let Some(vertex) = self.vertices.get_mut(&u) {
                vertex.decoration_mut().set_state(VertexState::Closed);
            }
        }
        Ok(())
    }

    /// Visits everything reachable from `root` that is still unvisited.
    ///
    /// Iterative, with an explicit stack of frames.
    /// `on_discover` sees each identifier as it is discovered.
    pub(super) fn depth_first_visit<F>(&mut self, root: Uid, clock: &mut u64, mut on_discover: F)
    where
        F: FnMut(Uid),
    {
        let Some(frame) = self.open(root, None, clock) else {
            return;
        };
        on_discover(root);
        let mut stack = vec![frame];

        while let Some(top) = stack.last_mut() {
            let current = top.id;
            match top.successors.next() {
                Some(next) => {
                    let Some(state) = self.vertex(next).map(|v| v.decoration().state()) else {
                        continue;
                    };
                    match state {
                        VertexState::Unvisited => {
                            if let Some(frame) = self.open(next, Some(current), clock) {
                                on_discover(next);
                                stack.push(frame);
                            }
                        }
                        VertexState::Visited => {
                            graph_trace!(from = %current, to = %next, "back edge");
                            self.acyclic = false;
                        }
                        VertexState::Closed => {}
                    }
                }
                None => {
                    stack.pop();
                    *clock += 1;
                    if let Some(vertex) = self.vertices.get_mut(&current) {
                        let decoration = vertex.decoration_mut();
                        decoration.set_state(VertexState::Closed);
                        decoration.set_closed(*clock);
                    }
                }
            }
        }
    }

    /// Marks `id` discovered and returns its frame.
    fn open(&mut self, id: Uid, ancestor: Option<Uid>, clock: &mut u64) -> Option<Frame> {
        let vertex = self.vertices.get_mut(&id)?;
        *clock += 1;
        let successors: Vec<Uid> = vertex.successors().collect();
        let decoration = vertex.decoration_mut();
        decoration.set_discovered(*clock);
        decoration.set_state(VertexState::Visited);
        decoration.set_ancestor(ancestor);
        Some(Frame {
            id,
            successors: successors.into_iter(),
        })
    }
}
