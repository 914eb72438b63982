//! Dependency graph construction from raw references
//!
//! # Design
//!
//! Resolution only ever *narrows*: every raw reference either resolves to a
//! module registered for this run or is dropped silently. External and
//! third-party references therefore never appear in the graph, and the
//! orderer can assume every edge endpoint is a registry member.
//!
//! Relative references follow package semantics: level L strips the last L
//! segments from the requesting module's identity, then appends the
//! reference target. `pkg.sub.mod` resolving `x` at level 1 yields
//! `pkg.sub.x`; at level 3 it yields `x`; level 4 exceeds the available
//! parents and yields nothing.

use tracing::{debug, warn};

use crate::graph::DependencyGraph;
use crate::registry::{ModuleId, ModuleRegistry};

use super::error::ExtractError;
use super::extractor::ReferenceExtractor;
use super::reference::RawReference;

/// Builds a [`DependencyGraph`] by resolving raw references against a registry
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder;

impl GraphBuilder {
    /// Creates a new builder
    pub fn new() -> Self {
        Self
    }

    /// Resolves one module's raw references to registered dependencies
    ///
    /// The result keeps first-occurrence order and is duplicate-free.
    /// Unresolvable and external references are dropped.
    pub fn resolve(
        &self,
        module: &ModuleId,
        references: &[RawReference],
        registry: &ModuleRegistry,
    ) -> Vec<ModuleId> {
        let mut resolved = Vec::new();

        for reference in references {
            let Some(candidate) = resolve_candidate(module, reference) else {
                continue;
            };
            if registry.contains(&candidate) && !resolved.contains(&candidate) {
                resolved.push(candidate);
            }
        }

        resolved
    }

    /// Builds the full graph for every registry member, in registry order
    ///
    /// Extraction failures are recovered per file: the file keeps an empty
    /// dependency set, the failure is returned for reporting, and the run
    /// continues. Every registry member is guaranteed a node.
    pub fn build<E: ReferenceExtractor>(
        &self,
        registry: &ModuleRegistry,
        extractor: &E,
    ) -> (DependencyGraph, Vec<ExtractError>) {
        let mut graph = DependencyGraph::new();
        let mut failures = Vec::new();

        for module in registry.identities() {
            graph.ensure_node(module.clone());

            let Some(path) = registry.path_of(module) else {
                continue;
            };

            let references = match extractor.extract(path) {
                Ok(references) => references,
                Err(err) => {
                    warn!(
                        module = %module,
                        error = %err,
                        "reference extraction failed, module treated as dependency-free"
                    );
                    failures.push(err);
                    continue;
                }
            };

            let dependencies = self.resolve(module, &references, registry);
            debug!(
                module = %module,
                raw = references.len(),
                resolved = dependencies.len(),
                "resolved module references"
            );
            for dependency in dependencies {
                graph.add_dependency(module.clone(), dependency);
            }
        }

        (graph, failures)
    }
}

/// Maps one raw reference to its candidate identity, before the registry
/// membership check. Returns None when the reference cannot denote an
/// internal module at all.
fn resolve_candidate(module: &ModuleId, reference: &RawReference) -> Option<ModuleId> {
    if reference.is_absolute() {
        return Some(ModuleId::new(reference.target()));
    }

    let segments: Vec<&str> = module.segments().collect();
    if reference.level() > segments.len() {
        return None;
    }

    let base = &segments[..segments.len() - reference.level()];
    if base.is_empty() && reference.target().is_empty() {
        return None;
    }

    // from_segments drops the target when it is empty
    Some(ModuleId::from_segments(
        base.iter().copied().chain([reference.target()]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::error::ExtractResult;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    /// In-memory extractor: maps file paths to canned reference lists.
    struct StaticExtractor {
        references: HashMap<PathBuf, Vec<RawReference>>,
        fail_on: Option<PathBuf>,
    }

    impl StaticExtractor {
        fn new() -> Self {
            Self {
                references: HashMap::new(),
                fail_on: None,
            }
        }

        fn with(mut self, path: &str, references: Vec<RawReference>) -> Self {
            self.references.insert(PathBuf::from(path), references);
            self
        }

        fn failing_on(mut self, path: &str) -> Self {
            self.fail_on = Some(PathBuf::from(path));
            self
        }
    }

    impl ReferenceExtractor for StaticExtractor {
        fn extract(&self, path: &Path) -> ExtractResult<Vec<RawReference>> {
            if self.fail_on.as_deref() == Some(path) {
                return Err(ExtractError::parse(path, "malformed source"));
            }
            Ok(self.references.get(path).cloned().unwrap_or_default())
        }
    }

    fn registry() -> ModuleRegistry {
        ModuleRegistry::build(
            ["pkg/x.py", "pkg/sub/x.py", "pkg/sub/mod.py", "x.py"],
            None,
        )
    }

    #[test]
    fn test_absolute_resolution() {
        let registry = registry();
        let deps = GraphBuilder::new().resolve(
            &ModuleId::new("pkg.sub.mod"),
            &[RawReference::absolute("pkg.x")],
            &registry,
        );
        assert_eq!(deps, vec![ModuleId::new("pkg.x")]);
    }

    #[test]
    fn test_external_reference_dropped() {
        let registry = registry();
        let deps = GraphBuilder::new().resolve(
            &ModuleId::new("pkg.sub.mod"),
            &[RawReference::absolute("os"), RawReference::absolute("numpy")],
            &registry,
        );
        assert!(deps.is_empty());
    }

    #[test]
    fn test_relative_levels() {
        let registry = registry();
        let builder = GraphBuilder::new();
        let module = ModuleId::new("pkg.sub.mod");

        // level 1: sibling inside pkg.sub
        let deps = builder.resolve(&module, &[RawReference::relative("x", 1)], &registry);
        assert_eq!(deps, vec![ModuleId::new("pkg.sub.x")]);

        // level 2: one package up
        let deps = builder.resolve(&module, &[RawReference::relative("x", 2)], &registry);
        assert_eq!(deps, vec![ModuleId::new("pkg.x")]);

        // level 3: package-root relative
        let deps = builder.resolve(&module, &[RawReference::relative("x", 3)], &registry);
        assert_eq!(deps, vec![ModuleId::new("x")]);
    }

    #[test]
    fn test_relative_level_exceeding_parents_drops() {
        let registry = registry();
        let deps = GraphBuilder::new().resolve(
            &ModuleId::new("pkg.sub.mod"),
            &[RawReference::relative("x", 4)],
            &registry,
        );
        assert!(deps.is_empty());
    }

    #[test]
    fn test_bare_relative_resolves_to_base() {
        let registry = ModuleRegistry::build(["pkg/sub.py", "pkg/sub/mod.py"], None);
        let deps = GraphBuilder::new().resolve(
            &ModuleId::new("pkg.sub.mod"),
            &[RawReference::relative("", 1)],
            &registry,
        );
        assert_eq!(deps, vec![ModuleId::new("pkg.sub")]);
    }

    #[test]
    fn test_duplicates_resolved_once() {
        let registry = registry();
        let deps = GraphBuilder::new().resolve(
            &ModuleId::new("pkg.sub.mod"),
            &[
                RawReference::absolute("pkg.x"),
                RawReference::relative("x", 2),
            ],
            &registry,
        );
        assert_eq!(deps, vec![ModuleId::new("pkg.x")]);
    }

    #[test]
    fn test_build_covers_every_registry_member() {
        let registry = ModuleRegistry::build(["main.py", "util.py"], None);
        let extractor =
            StaticExtractor::new().with("main.py", vec![RawReference::absolute("util")]);

        let (graph, failures) = GraphBuilder::new().build(&registry, &extractor);

        assert!(failures.is_empty());
        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.dependencies(&ModuleId::new("main")),
            &[ModuleId::new("util")]
        );
        assert!(graph.dependencies(&ModuleId::new("util")).is_empty());
    }

    #[test]
    fn test_build_recovers_from_extraction_failure() {
        let registry = ModuleRegistry::build(["main.py", "bad.py"], None);
        let extractor = StaticExtractor::new()
            .with("main.py", vec![RawReference::absolute("bad")])
            .failing_on("bad.py");

        let (graph, failures) = GraphBuilder::new().build(&registry, &extractor);

        // the failing file keeps an empty set; the rest of the run is intact
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path(), Path::new("bad.py"));
        assert_eq!(graph.len(), 2);
        assert!(graph.dependencies(&ModuleId::new("bad")).is_empty());
        assert_eq!(
            graph.dependencies(&ModuleId::new("main")),
            &[ModuleId::new("bad")]
        );
    }
}
