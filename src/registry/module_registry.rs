//! Module registry: the bijective mapping between module identities and
//! file paths for one sorting run.
//!
//! The registry is built once from the input file list and is immutable
//! afterwards. Iteration order over identities is the input file order,
//! which fixes tie-breaking downstream (graph construction and topological
//! ordering both walk the registry in this order).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::module_id::{ModuleId, JOIN_CHAR};

/// Extension stripped from file names when deriving a module identity.
pub const SOURCE_FILE_EXTENSION: &str = "py";

/// Record of two distinct input files deriving the same module identity
///
/// The later file in input order wins the registry slot; the earlier one is
/// dropped from the mapping but reported so callers can surface the
/// ambiguity instead of silently merging unrelated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityCollision {
    /// The identity both files derived
    pub identity: ModuleId,
    /// The file that kept the registry slot
    pub kept: PathBuf,
    /// The file that was displaced
    pub replaced: PathBuf,
}

/// Bijective ModuleId <-> file path mapping for one sorting run
///
/// # Examples
///
/// ```
/// use taxis::{ModuleId, ModuleRegistry};
///
/// let registry = ModuleRegistry::build(["pkg/util.py", "pkg/main.py"], None);
/// assert_eq!(registry.len(), 2);
/// assert!(registry.contains(&ModuleId::new("pkg.util")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    id_to_path: HashMap<ModuleId, PathBuf>,
    path_to_id: HashMap<PathBuf, ModuleId>,
    /// Identities in input file order, each exactly once
    order: Vec<ModuleId>,
    collisions: Vec<IdentityCollision>,
}

impl ModuleRegistry {
    /// Builds a registry from a file list and an optional base directory
    ///
    /// Each path is made relative to `base_dir` when one is given (paths
    /// outside the base directory are used as-is), then turned into an
    /// identity by joining path segments with `.` and stripping a trailing
    /// `.py` extension.
    ///
    /// Duplicate derived identities are accepted: the later file wins and
    /// the collision is recorded (see [`ModuleRegistry::collisions`]).
    pub fn build(
        files: impl IntoIterator<Item = impl Into<PathBuf>>,
        base_dir: Option<&Path>,
    ) -> Self {
        let mut registry = Self::default();

        for path in files {
            let path = path.into();
            let identity = derive_identity(&path, base_dir);

            if let Some(replaced) = registry.id_to_path.insert(identity.clone(), path.clone()) {
                warn!(
                    identity = %identity,
                    kept = %path.display(),
                    replaced = %replaced.display(),
                    "module identity collision, later file wins"
                );
                registry.path_to_id.remove(&replaced);
                registry.collisions.push(IdentityCollision {
                    identity: identity.clone(),
                    kept: path.clone(),
                    replaced,
                });
            } else {
                registry.order.push(identity.clone());
            }

            registry.path_to_id.insert(path, identity);
        }

        registry
    }

    /// Returns the identity derived for a file, if the file was registered
    pub fn identity_of(&self, path: impl AsRef<Path>) -> Option<&ModuleId> {
        self.path_to_id.get(path.as_ref())
    }

    /// Returns the file path behind an identity
    pub fn path_of(&self, identity: &ModuleId) -> Option<&Path> {
        self.id_to_path.get(identity).map(PathBuf::as_path)
    }

    /// Returns true if the identity belongs to a registered file
    pub fn contains(&self, identity: &ModuleId) -> bool {
        self.id_to_path.contains_key(identity)
    }

    /// Iterates all identities in input file order
    pub fn identities(&self) -> impl Iterator<Item = &ModuleId> {
        self.order.iter()
    }

    /// Returns the number of distinct identities
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no files were registered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the identity collisions observed while building
    pub fn collisions(&self) -> &[IdentityCollision] {
        &self.collisions
    }
}

/// Derives the module identity for one file path
///
/// Extension stripping is exact-suffix: only a trailing `.py` is removed,
/// so a file named `happy.py` becomes `happy`, not a mangled prefix.
fn derive_identity(path: &Path, base_dir: Option<&Path>) -> ModuleId {
    let relative = match base_dir {
        Some(base) => path.strip_prefix(base).unwrap_or(path),
        None => path,
    };

    let mut name = relative
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, &JOIN_CHAR.to_string());

    let suffix = format!("{JOIN_CHAR}{SOURCE_FILE_EXTENSION}");
    if let Some(stripped) = name.strip_suffix(&suffix) {
        name = stripped.to_string();
    }

    ModuleId::new(name)
}
