//! Directed graph data model and algorithms.
//!
//! - `uid`, `decoration`, `edge`, `vertex`: the data model
//! - `digraph`: the graph type and its algorithms
//! - `heuristic`: heuristics for A*

mod decoration;
pub mod digraph;
mod edge;
mod error;
pub mod heuristic;
mod path;
mod uid;
mod vertex;

pub use decoration::{Decoration, VertexState};
pub use digraph::Digraph;
pub use edge::{Edge, EdgeCollection};
pub use error::{GraphError, Result};
pub use path::Path;
pub use uid::Uid;
pub use vertex::{Vertex, VertexCollection};
