//! Collections backing the graph.
//!
//! - `keyed`: ordered containers keyed by an item-provided identifier, used
//!   for both the vertex collection of a graph and the edge collection of a
//!   vertex.

pub mod keyed;

pub use keyed::{Keyed, KeyedCollection};
