//! Deterministic topological ordering with cycle detection
//!
//! # Design
//!
//! Depth-first post-order: a module is appended to the result only after
//! all of its dependencies are, so the output reads least-dependent first.
//! Each module carries one of three marks for the duration of a single
//! `sort` call:
//!
//! - `Unvisited`: not reached yet
//! - `InProgress`: on the current traversal path
//! - `Done`: fully processed and appended
//!
//! Reaching an `InProgress` module is a back-edge, which proves a cycle;
//! the sort aborts naming that module. Marks are monotonic
//! (Unvisited -> InProgress -> Done) and local to the call, so the same
//! sorter can be reused across graphs and repeated calls are idempotent.
//!
//! The walk uses an explicit work stack of `(module, next-child-index)`
//! frames rather than recursion, so graph depth is bounded by memory, not
//! by the call stack.
//!
//! # Determinism
//!
//! Roots are visited in registry (input file) order and dependencies in
//! the graph's stored insertion order, which fixes tie-breaking among
//! independent subgraphs to input order.

use std::collections::HashMap;

use tracing::debug;

use crate::graph::{DependencyGraph, GraphError, GraphResult};
use crate::registry::{ModuleId, ModuleRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Depth-first topological orderer over a [`DependencyGraph`]
///
/// # Examples
///
/// ```
/// use taxis::{DependencyGraph, ModuleId, ModuleRegistry, TopologicalSorter};
///
/// let registry = ModuleRegistry::build(["a.py", "b.py"], None);
/// let mut graph = DependencyGraph::new();
/// graph.ensure_node(ModuleId::new("b"));
/// graph.add_dependency(ModuleId::new("a"), ModuleId::new("b"));
///
/// let order = TopologicalSorter::new().sort(&graph, &registry).unwrap();
/// assert_eq!(order, vec![ModuleId::new("b"), ModuleId::new("a")]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TopologicalSorter;

impl TopologicalSorter {
    /// Creates a new sorter
    pub fn new() -> Self {
        Self
    }

    /// Orders every registry member so each dependency precedes its dependents
    ///
    /// Fails with [`GraphError::CycleDetected`] when the graph is not a DAG;
    /// no partial ordering is returned in that case.
    pub fn sort(
        &self,
        graph: &DependencyGraph,
        registry: &ModuleRegistry,
    ) -> GraphResult<Vec<ModuleId>> {
        let mut marks: HashMap<&ModuleId, Mark> = HashMap::with_capacity(registry.len());
        let mut ordering = Vec::with_capacity(registry.len());

        for root in registry.identities() {
            self.visit(root, graph, registry, &mut marks, &mut ordering)?;
        }

        debug!(modules = ordering.len(), "topological ordering complete");
        Ok(ordering)
    }

    /// One depth-first walk from `root`, appending in post-order
    fn visit<'g>(
        &self,
        root: &'g ModuleId,
        graph: &'g DependencyGraph,
        registry: &ModuleRegistry,
        marks: &mut HashMap<&'g ModuleId, Mark>,
        ordering: &mut Vec<ModuleId>,
    ) -> GraphResult<()> {
        if mark_of(marks, root) == Mark::Done {
            return Ok(());
        }

        let mut stack: Vec<(&'g ModuleId, usize)> = vec![(root, 0)];
        marks.insert(root, Mark::InProgress);

        while let Some(&(module, index)) = stack.last() {
            let dependencies = graph.dependencies(module);

            if index == dependencies.len() {
                marks.insert(module, Mark::Done);
                ordering.push(module.clone());
                stack.pop();
                continue;
            }

            let top = stack.len() - 1;
            stack[top].1 += 1;

            let dependency = &dependencies[index];
            // edges into unregistered modules cannot occur via GraphBuilder,
            // but hand-built graphs may carry them; they are ignored
            if !registry.contains(dependency) {
                continue;
            }

            match mark_of(marks, dependency) {
                Mark::Done => {}
                Mark::InProgress => return Err(GraphError::cycle(dependency.clone())),
                Mark::Unvisited => {
                    marks.insert(dependency, Mark::InProgress);
                    stack.push((dependency, 0));
                }
            }
        }

        Ok(())
    }
}

fn mark_of(marks: &HashMap<&ModuleId, Mark>, module: &ModuleId) -> Mark {
    marks.get(module).copied().unwrap_or(Mark::Unvisited)
}
