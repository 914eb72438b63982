//! Error types for reference extraction
//!
//! Extraction failures are recoverable at the run level: the affected file
//! contributes an empty dependency set and the run continues. The error
//! still carries enough context (the file path and cause) to be reported
//! as a warning.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors that can occur while extracting references from one source file
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// The source file could not be read
    #[error("failed to read {}", .path.display())]
    Io {
        /// The file that could not be read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source text could not be parsed by the extractor
    #[error("failed to parse {}: {reason}", .path.display())]
    Parse {
        /// The file that could not be parsed
        path: PathBuf,
        /// Extractor-specific description of the failure
        reason: String,
    },
}

impl ExtractError {
    /// Creates an I/O extraction error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse extraction error
    pub fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns the file the extractor failed on
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
            Self::Parse { path, .. } => path,
        }
    }
}
