//! End-to-end sorting pipeline
//!
//! [`DependencySorter`] wires the stages together: file list -> registry ->
//! extraction + resolution -> topological ordering -> file paths. Recovered
//! conditions (extraction failures, identity collisions) surface as
//! [`Warning`]s on the outcome instead of failing the run; only a cycle is
//! fatal.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::graph::GraphResult;
use crate::registry::{ModuleId, ModuleRegistry};
use crate::resolve::{ExtractError, GraphBuilder, PythonExtractor, ReferenceExtractor};

use super::topo::TopologicalSorter;

/// Non-fatal condition reported alongside a successful sort
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Warning {
    /// Reference extraction failed; the file was treated as dependency-free
    #[error("module treated as dependency-free: {0}")]
    ExtractionFailed(#[from] ExtractError),

    /// Two input files derived the same identity; the later one won
    #[error(
        "module identity collision on {identity}: {} displaced {}",
        .kept.display(),
        .replaced.display()
    )]
    IdentityCollision {
        /// The identity both files derived
        identity: ModuleId,
        /// The file that kept the registry slot
        kept: PathBuf,
        /// The file that was displaced
        replaced: PathBuf,
    },
}

/// Result of a successful sorting run
#[derive(Debug)]
pub struct SortOutcome {
    /// Input files reordered least-dependent first
    pub files: Vec<PathBuf>,
    /// Recovered conditions observed during the run
    pub warnings: Vec<Warning>,
}

/// Orders a set of source files so dependencies come before dependents
///
/// # Examples
///
/// ```no_run
/// use taxis::DependencySorter;
///
/// let outcome = DependencySorter::new(["src/main.py", "src/util.py"])
///     .with_base_dir("src")
///     .sorted_files()?;
///
/// for file in &outcome.files {
///     println!("{}", file.display());
/// }
/// # Ok::<(), taxis::GraphError>(())
/// ```
#[derive(Debug)]
pub struct DependencySorter<E = PythonExtractor> {
    files: Vec<PathBuf>,
    base_dir: Option<PathBuf>,
    extractor: E,
}

impl DependencySorter<PythonExtractor> {
    /// Creates a sorter over the given files using the bundled Python extractor
    pub fn new(files: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            base_dir: None,
            extractor: PythonExtractor::new(),
        }
    }
}

impl<E: ReferenceExtractor> DependencySorter<E> {
    /// Sets the base directory identities are derived relative to
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Swaps in a different reference extractor
    pub fn with_extractor<X: ReferenceExtractor>(self, extractor: X) -> DependencySorter<X> {
        DependencySorter {
            files: self.files,
            base_dir: self.base_dir,
            extractor,
        }
    }

    /// Runs the pipeline and returns the files least-dependent first
    ///
    /// Fails only on a dependency cycle; in that case no ordering is
    /// returned. Extraction failures and identity collisions are reported
    /// as warnings on the outcome.
    pub fn sorted_files(&self) -> GraphResult<SortOutcome> {
        let registry = ModuleRegistry::build(self.files.iter().cloned(), self.base_dir.as_deref());

        let mut warnings: Vec<Warning> = registry
            .collisions()
            .iter()
            .map(|collision| Warning::IdentityCollision {
                identity: collision.identity.clone(),
                kept: collision.kept.clone(),
                replaced: collision.replaced.clone(),
            })
            .collect();

        let (graph, failures) = GraphBuilder::new().build(&registry, &self.extractor);
        warnings.extend(failures.into_iter().map(Warning::from));

        let ordering = TopologicalSorter::new().sort(&graph, &registry)?;

        let files = ordering
            .iter()
            .filter_map(|module| registry.path_of(module).map(Path::to_path_buf))
            .collect();

        Ok(SortOutcome { files, warnings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphError;
    use crate::registry::ModuleId;
    use crate::resolve::{ExtractResult, RawReference};
    use std::collections::HashMap;

    /// In-memory extractor keyed by file path.
    struct StaticExtractor(HashMap<PathBuf, Vec<RawReference>>);

    impl StaticExtractor {
        fn new(entries: &[(&str, Vec<RawReference>)]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(path, refs)| (PathBuf::from(path), refs.clone()))
                    .collect(),
            )
        }
    }

    impl ReferenceExtractor for StaticExtractor {
        fn extract(&self, path: &Path) -> ExtractResult<Vec<RawReference>> {
            Ok(self.0.get(path).cloned().unwrap_or_default())
        }
    }

    #[test]
    fn test_pipeline_orders_files() {
        let extractor = StaticExtractor::new(&[
            ("main.py", vec![RawReference::absolute("util")]),
            ("util.py", vec![]),
        ]);

        let outcome = DependencySorter::new(["main.py", "util.py"])
            .with_extractor(extractor)
            .sorted_files()
            .unwrap();

        assert_eq!(
            outcome.files,
            vec![PathBuf::from("util.py"), PathBuf::from("main.py")]
        );
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_pipeline_cycle_is_fatal() {
        let extractor = StaticExtractor::new(&[
            ("a.py", vec![RawReference::absolute("b")]),
            ("b.py", vec![RawReference::absolute("a")]),
        ]);

        let err = DependencySorter::new(["a.py", "b.py"])
            .with_extractor(extractor)
            .sorted_files()
            .unwrap_err();

        assert!(matches!(err, GraphError::CycleDetected { .. }));
    }

    #[test]
    fn test_pipeline_reports_collision_warning() {
        let extractor = StaticExtractor::new(&[]);

        let outcome = DependencySorter::new(["util.py", "util"])
            .with_extractor(extractor)
            .sorted_files()
            .unwrap();

        assert_eq!(outcome.files.len(), 1);
        assert!(matches!(
            outcome.warnings.as_slice(),
            [Warning::IdentityCollision { identity, .. }] if *identity == ModuleId::new("util")
        ));
    }

    #[test]
    fn test_pipeline_unresolved_references_tolerated() {
        let extractor = StaticExtractor::new(&[(
            "main.py",
            vec![
                RawReference::absolute("os"),
                RawReference::absolute("nowhere.at.all"),
            ],
        )]);

        let outcome = DependencySorter::new(["main.py"])
            .with_extractor(extractor)
            .sorted_files()
            .unwrap();

        assert_eq!(outcome.files, vec![PathBuf::from("main.py")]);
    }
}
