//! Per-vertex algorithm state.
//!
//! Traversal fields (`state`, `distance`, `ancestor`, `discovered`, `closed`)
//! are reset by every algorithm before it runs. The degree counters describe
//! structure and are only touched by edge insertion and removal.

use serde::{Deserialize, Serialize};

use super::Uid;

/// Traversal status of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VertexState {
    /// Not reached yet.
    #[default]
    Unvisited,
    /// Reached, still being expanded.
    Visited,
    /// Fully expanded.
    Closed,
}

/// Transient traversal state plus persistent degree counters of a vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    state: VertexState,
    distance: u64,
    ancestor: Option<Uid>,
    discovered: u64,
    closed: u64,
    in_degree: u64,
    out_degree: u64,
}

impl Decoration {
    /// Distance value meaning "not reached".
    pub const INFINITE: u64 = u64::MAX;

    /// Creates a decoration in its reset state with zero degrees.
    pub const fn new() -> Self {
        Self {
            state: VertexState::Unvisited,
            distance: Self::INFINITE,
            ancestor: None,
            discovered: 0,
            closed: 0,
            in_degree: 0,
            out_degree: 0,
        }
    }

    /// Clears traversal state. Degree counters are kept.
    pub fn reset(&mut self) {
        self.state = VertexState::Unvisited;
        self.distance = Self::INFINITE;
        self.ancestor = None;
        self.discovered = 0;
        self.closed = 0;
    }

    /// Traversal status.
    pub fn state(&self) -> VertexState {
        self.state
    }

    /// Hop count or accumulated weight from the last traversal's source.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Predecessor in the last traversal tree.
    pub fn ancestor(&self) -> Option<Uid> {
        self.ancestor
    }

    /// DFS pre-order timestamp; `0` when never discovered.
    pub fn discovered(&self) -> u64 {
        self.discovered
    }

    /// DFS post-order timestamp; `0` when never closed.
    pub fn closed(&self) -> u64 {
        self.closed
    }

    /// Number of edges pointing at this vertex.
    pub fn in_degree(&self) -> u64 {
        self.in_degree
    }

    /// Number of edges leaving this vertex.
    pub fn out_degree(&self) -> u64 {
        self.out_degree
    }

    /// `in_degree + out_degree`.
    pub fn grade(&self) -> u64 {
        self.in_degree + self.out_degree
    }

    pub(crate) fn set_state(&mut self, state: VertexState) {
        self.state = state;
    }

    pub(crate) fn set_distance(&mut self, distance: u64) {
        self.distance = distance;
    }

    pub(crate) fn set_ancestor(&mut self, ancestor: Option<Uid>) {
        self.ancestor = ancestor;
    }

    pub(crate) fn set_discovered(&mut self, time: u64) {
        self.discovered = time;
    }

    pub(crate) fn set_closed(&mut self, time: u64) {
        self.closed = time;
    }

    pub(crate) fn set_in_degree(&mut self, degree: u64) {
        self.in_degree = degree;
    }

    pub(crate) fn set_out_degree(&mut self, degree: u64) {
        self.out_degree = degree;
    }

    pub(crate) fn inc_in_degree(&mut self) {
        self.in_degree += 1;
    }

    pub(crate) fn dec_in_degree(&mut self) {
        self.in_degree = self.in_degree.saturating_sub(1);
    }

    pub(crate) fn inc_out_degree(&mut self) {
        self.out_degree += 1;
    }

    pub(crate) fn dec_out_degree(&mut self) {
        self.out_degree = self.out_degree.saturating_sub(1);
    }
}

impl Default for Decoration {
    fn default() -> Self {
        Self::new()
    }
}
