use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::collections::{Keyed, KeyedCollection};

use super::{Decoration, Edge, EdgeCollection, Uid};

/// The vertices of one graph, keyed by identifier.
pub type VertexCollection<V> = KeyedCollection<Vertex<V>>;

/// A vertex: identifier, payload, decoration and outgoing edges.
///
/// Equality, ordering and hashing use the identifier only.
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    id: Uid,
    value: V,
    decoration: Decoration,
    edges: EdgeCollection,
}

impl<V> Vertex<V> {
    /// Creates a vertex without edges.
    pub fn new(id: Uid, value: V) -> Self {
        Self {
            id,
            value,
            decoration: Decoration::new(),
            edges: EdgeCollection::new(),
        }
    }

    /// The identifier. Immutable after construction.
    pub fn id(&self) -> Uid {
        self.id
    }

    /// The payload.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The payload, mutably.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the payload, returning the old one.
    pub fn set_value(&mut self, value: V) -> V {
        core::mem::replace(&mut self.value, value)
    }

    /// Consumes the vertex and returns its payload.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Traversal state and degree counters.
    pub fn decoration(&self) -> &Decoration {
        &self.decoration
    }

    /// Outgoing edges in target order.
    pub fn edges(&self) -> &EdgeCollection {
        &self.edges
    }

    /// The edge to `target`, if any.
    pub fn edge_to(&self, target: Uid) -> Option<&Edge> {
        self.edges.get(&target)
    }

    /// Targets of outgoing edges, in order.
    pub fn successors(&self) -> impl Iterator<Item = Uid> + '_ {
        self.edges.keys().copied()
    }

    /// `in_degree + out_degree`.
    pub fn grade(&self) -> u64 {
        self.decoration.grade()
    }

    pub(crate) fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.decoration
    }

    pub(crate) fn edges_mut(&mut self) -> &mut EdgeCollection {
        &mut self.edges
    }
}

impl<V> Keyed for Vertex<V> {
    type Key = Uid;

    fn key(&self) -> Uid {
        self.id
    }
}

impl<V> PartialEq for Vertex<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V> Eq for Vertex<V> {}

impl<V> PartialOrd for Vertex<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for Vertex<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<V> Hash for Vertex<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
