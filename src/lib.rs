//! Taxis: dependency-respecting module ordering
//!
//! `taxis` (τάξις, Greek for "arrangement, order") computes a deterministic
//! linear order over a set of source modules so that a downstream consumer,
//! such as a file concatenator or bundler, can process least-dependent
//! modules before the modules that depend on them.
//!
//! # Features
//!
//! - **Identity registry**: canonical module identities derived from file
//!   paths, with a bijective identity <-> path mapping per run
//! - **Reference resolution**: absolute and relative import references
//!   resolved against the registry; external references dropped
//! - **Deterministic ordering**: depth-first topological sort with
//!   input-order tie-breaking, identical output for identical input
//! - **Cycle detection**: back-edge detection naming the offending module
//! - **Pluggable extraction**: bring your own [`ReferenceExtractor`] for a
//!   different source ecosystem; a Python import scanner is bundled
//!
//! # Quick Start
//!
//! ```no_run
//! use taxis::DependencySorter;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let outcome = DependencySorter::new(["src/main.py", "src/util.py"])
//!         .with_base_dir("src")
//!         .sorted_files()?;
//!
//!     // least-dependent first, ready for concatenation
//!     for file in &outcome.files {
//!         println!("{}", file.display());
//!     }
//!     for warning in &outcome.warnings {
//!         eprintln!("warning: {warning}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! Each module hides one design decision that is likely to change:
//!
//! - [`registry`]: how identities are derived from storage paths
//! - [`resolve`]: how references are recognized and resolved
//! - [`graph`]: the graph representation
//! - [`sorter`]: the ordering strategy
//!
//! # Errors
//!
//! Only a dependency cycle fails a run ([`GraphError::CycleDetected`]).
//! Per-file extraction failures and identity collisions are recovered and
//! reported as [`Warning`]s on the outcome.

pub mod graph;
pub mod registry;
pub mod resolve;
pub mod sorter;

// Re-export commonly used types for convenience
pub use graph::{DependencyGraph, GraphError, GraphResult};
pub use registry::{IdentityCollision, ModuleId, ModuleRegistry};
pub use resolve::{
    ExtractError, ExtractResult, GraphBuilder, PythonExtractor, RawReference, ReferenceExtractor,
};
pub use sorter::{DependencySorter, SortOutcome, TopologicalSorter, Warning};

// Re-export dependencies used in the public API so callers don't hit
// version mismatches when deriving on their own types
pub use serde;

/// Prelude module for convenient glob imports
///
/// # Example
///
/// ```
/// use taxis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::graph::{DependencyGraph, GraphError, GraphResult};
    pub use crate::registry::{ModuleId, ModuleRegistry};
    pub use crate::resolve::{
        ExtractError, GraphBuilder, PythonExtractor, RawReference, ReferenceExtractor,
    };
    pub use crate::sorter::{DependencySorter, SortOutcome, TopologicalSorter, Warning};
}
