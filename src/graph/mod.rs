//! Dependency graph structures
//!
//! This module hides the graph representation (adjacency list) and exposes
//! only abstract operations: add nodes and edges, look up dependencies,
//! iterate deterministically.

mod dep_graph;
mod error;

pub use dep_graph::DependencyGraph;
pub use error::{GraphError, GraphResult};
