//! Error types for graph operations
//!
//! This module hides error representation details and provides a unified
//! error type for graph construction and ordering.

use crate::registry::ModuleId;
use thiserror::Error;

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur during graph operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// A cycle was detected in the dependency graph
    ///
    /// Names the module at which the first back-edge was encountered under
    /// the fixed visitation order, which is one module on the cycle but not
    /// necessarily on the smallest one.
    #[error("circular dependency detected involving {module}")]
    CycleDetected {
        /// The module the depth-first walk re-entered
        module: ModuleId,
    },
}

impl GraphError {
    /// Creates a cycle detected error naming the re-entered module
    pub fn cycle(module: ModuleId) -> Self {
        Self::CycleDetected { module }
    }
}
