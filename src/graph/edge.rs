use core::cmp::Ordering;

use crate::collections::{Keyed, KeyedCollection};
use crate::sort::Weighted;

use super::Uid;

/// The outgoing edges of one vertex, keyed by target.
pub type EdgeCollection = KeyedCollection<Edge>;

/// A directed, weighted edge.
///
/// The target is referenced by identifier, so an edge never owns or pins the
/// vertex it points at. An edge whose target has been removed from the graph
/// is *dangling* and is skipped by every traversal.
///
/// Edges are equal when source, target and weight all match, and order by
/// weight first.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    from: Uid,
    to: Uid,
    weight: f64,
}

impl Edge {
    /// Weight meaning "unset": the edge exists but weighted searches never
    /// traverse it.
    pub const UNSET_WEIGHT: f64 = f64::MAX;

    pub(crate) fn new(from: Uid, to: Uid, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Source vertex.
    pub fn source(&self) -> Uid {
        self.from
    }

    /// Target vertex.
    pub fn target(&self) -> Uid {
        self.to
    }

    /// Edge weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Replaces the edge weight.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Returns `true` if the weight was never assigned.
    pub fn is_unset(&self) -> bool {
        self.weight >= Self::UNSET_WEIGHT
    }
}

impl Keyed for Edge {
    type Key = Uid;

    fn key(&self) -> Uid {
        self.to
    }
}

impl Weighted for Edge {
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.weight == other.weight
    }
}

impl PartialOrd for Edge {
    /// Orders by weight, then by `(source, target)` among equal weights.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.weight.partial_cmp(&other.weight)? {
            Ordering::Equal => Some((self.from, self.to).cmp(&(other.from, other.to))),
            ordering => Some(ordering),
        }
    }
}
