//! Topological ordering and the end-to-end sorting pipeline
//!
//! This module hides the ordering strategy (iterative depth-first
//! post-order). Callers see [`TopologicalSorter::sort`] on a prepared
//! graph, or the whole pipeline via [`DependencySorter`].

mod pipeline;
mod topo;

pub use pipeline::{DependencySorter, SortOutcome, Warning};
pub use topo::TopologicalSorter;
