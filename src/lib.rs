//! # `halo-digraph` - Directed Graph Toolkit
//!
//! A generic, in-memory directed graph with a standard suite of algorithms:
//! breadth-first and depth-first search, unweighted and weighted shortest
//! paths (BFS, Dijkstra, A*, weighted A*), acyclicity and connectivity checks,
//! transpose, topological sort and strongly connected components.
//!
//! ## Data Model
//!
//! 1. **Identifiers** (`Uid`): totally ordered 64-bit keys, unique per graph.
//! 2. **Vertices** (`Vertex<V>`): own a payload, an identifier, a
//!    [`Decoration`] and the collection of their outgoing edges.
//! 3. **Edges** (`Edge`): directed, weighted references to a target vertex
//!    *by identifier*. Removing a vertex never leaves a dangling pointer;
//!    traversals skip edges whose target is gone.
//! 4. **Decorations**: per-vertex traversal state (state, distance,
//!    ancestor, discovery/closing time) plus structural in/out degree.
//!    Every algorithm resets the traversal fields itself before running.
//!
//! ## Error Model
//!
//! - Inserting an existing identifier fails with [`GraphError::DuplicateKey`].
//! - Lookups and removals that match nothing return `None`.
//! - Path searches return `Ok(None)` when the target is unreachable and
//!   `Err(GraphError::MissingVertex)` when an endpoint is not in the graph.
//! - `topological_sort` returns `None` on cyclic graphs.
//!
//! ## Example
//!
//! ```rust
//! use halo_digraph::{Digraph, Uid};
//!
//! let mut g = Digraph::new();
//! for id in 1..=4 {
//!     g.add_vertex(Uid::new(id), ()).unwrap();
//! }
//! g.add_edge(Uid::new(1), Uid::new(2), 1.0).unwrap();
//! g.add_edge(Uid::new(2), Uid::new(4), 4.0).unwrap();
//! g.add_edge(Uid::new(1), Uid::new(3), 2.0).unwrap();
//! g.add_edge(Uid::new(3), Uid::new(4), 1.0).unwrap();
//!
//! let path = g
//!     .shortest_path_dijkstra(Uid::new(1), Uid::new(4))
//!     .unwrap()
//!     .expect("4 is reachable");
//! assert_eq!(path.cost(), 3.0);
//! assert_eq!(path.forward(), vec![Uid::new(1), Uid::new(3), Uid::new(4)]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod collections;
pub mod graph;
pub mod sort;

pub use collections::{Keyed, KeyedCollection};
pub use graph::{
    heuristic, Decoration, Digraph, Edge, EdgeCollection, GraphError, Path, Uid, Vertex,
    VertexCollection, VertexState,
};
pub use sort::{heap_sort, SortOrder, Weighted};
