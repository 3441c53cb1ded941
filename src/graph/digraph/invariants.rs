//! Structural invariant checks.
//!
//! Violations trip a `debug_assert!` in debug builds; release builds only
//! report them through the return value.

use std::collections::BTreeMap;

use super::Digraph;
use crate::graph::Uid;

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
fn invariant(condition: bool, message: &str) -> bool {
    debug_assert!(condition, "Graph invariant violated: {message}");
    condition
}

impl<V> Digraph<V> {
    /// Validates the graph's structural invariants.
    ///
    /// Checks that:
    /// 1. Every edge is stored under its owner and keyed by its target
    /// 2. Out-degree counters equal the number of stored edges
    /// 3. In-degree counters equal the number of live edges into each vertex
    /// 4. Orphaned in-degree only refers to absent identifiers
    ///
    /// Returns `true` if all invariants hold.
    pub fn validate_invariants(&self) -> bool {
        let mut in_degree: BTreeMap<Uid, u64> = BTreeMap::new();
        let mut dangling: BTreeMap<Uid, u64> = BTreeMap::new();

        for vertex in self.vertices.iter() {
            for edge in vertex.edges() {
                if !invariant(edge.source() == vertex.id(), "edge stored under its source") {
                    return false;
                }
                let slot = if self.vertices.contains(&edge.target()) {
                    in_degree.entry(edge.target()).or_default()
                } else {
                    dangling.entry(edge.target()).or_default()
                };
                *slot += 1;
            }
            if !invariant(
                vertex.decoration().out_degree() == vertex.edges().len() as u64,
                "out-degree matches stored edges",
            ) {
                return false;
            }
        }

        for vertex in self.vertices.iter() {
            let expected = in_degree.get(&vertex.id()).copied().unwrap_or(0);
            if !invariant(
                vertex.decoration().in_degree() == expected,
                "in-degree matches incoming live edges",
            ) {
                return false;
            }
        }

        invariant(
            self.orphaned_in_degree == dangling,
            "orphaned in-degree matches dangling edges",
        )
    }
}
