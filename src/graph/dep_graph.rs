//! Dependency graph over module identities
//!
//! # Design
//!
//! The graph is an adjacency list from a module to the modules it depends
//! on (the modules that must be processed first). Per-node dependency lists
//! keep **insertion order** and are deduplicated on insert; together with
//! the graph-level insertion order of nodes this makes every traversal of
//! the graph reproducible for the same input.
//!
//! Cycles are representable here; detecting them is the ordering step's
//! job, where the offending module can be named from the traversal path.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::registry::ModuleId;

/// A directed graph of internal module dependencies
///
/// Every registered module gets a node, even when its dependency list is
/// empty. Edges point from a module to its dependencies.
///
/// # Examples
///
/// ```
/// use taxis::{DependencyGraph, ModuleId};
///
/// let mut graph = DependencyGraph::new();
/// graph.ensure_node(ModuleId::new("main"));
/// graph.add_dependency(ModuleId::new("main"), ModuleId::new("util"));
///
/// assert_eq!(graph.dependencies(&ModuleId::new("main")).len(), 1);
/// assert_eq!(graph.dependencies(&ModuleId::new("util")).len(), 0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyGraph {
    /// Map from module to its dependencies, in insertion order
    nodes: HashMap<ModuleId, Vec<ModuleId>>,
    /// Node insertion order for deterministic iteration
    insertion_order: Vec<ModuleId>,
}

impl DependencyGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes in the graph
    pub fn len(&self) -> usize {
        self.insertion_order.len()
    }

    /// Returns true if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.insertion_order.is_empty()
    }

    /// Adds a node with no dependencies if it is not already present
    pub fn ensure_node(&mut self, module: ModuleId) {
        if !self.nodes.contains_key(&module) {
            self.insertion_order.push(module.clone());
            self.nodes.insert(module, Vec::new());
        }
    }

    /// Adds a dependency edge: `module` depends on `dependency`
    ///
    /// Both endpoints get nodes if missing. Inserting the same edge twice
    /// is a no-op, so dependency lists stay duplicate-free.
    pub fn add_dependency(&mut self, module: ModuleId, dependency: ModuleId) {
        self.ensure_node(dependency.clone());
        self.ensure_node(module.clone());

        // ensure_node guarantees the entry exists
        if let Some(deps) = self.nodes.get_mut(&module) {
            if !deps.contains(&dependency) {
                deps.push(dependency);
            }
        }
    }

    /// Returns the dependencies of a module in insertion order
    ///
    /// A module without a node yields an empty slice.
    pub fn dependencies(&self, module: &ModuleId) -> &[ModuleId] {
        self.nodes.get(module).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if the module has a node in the graph
    pub fn contains(&self, module: &ModuleId) -> bool {
        self.nodes.contains_key(module)
    }

    /// Iterates all modules in node insertion order
    pub fn modules(&self) -> impl Iterator<Item = &ModuleId> {
        self.insertion_order.iter()
    }

    /// Clears all nodes and edges
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.insertion_order.clear();
    }
}
