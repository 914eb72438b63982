//! Raw import references as they appear in source text
//!
//! A raw reference is unresolved: it may name a module absolutely
//! (`pkg.util`) or relatively, carrying a "levels up" count from the
//! requesting module (`..support.reader` is target `support.reader` at
//! level 2). Resolution against a registry happens in
//! [`GraphBuilder`](super::GraphBuilder).

use serde::{Deserialize, Serialize};
use std::fmt;

/// An unresolved import reference extracted from one module's source
///
/// # Examples
///
/// ```
/// use taxis::RawReference;
///
/// let abs = RawReference::absolute("pkg.util");
/// assert!(abs.is_absolute());
///
/// let rel = RawReference::relative("reader", 1);
/// assert_eq!(rel.level(), 1);
/// assert_eq!(rel.target(), "reader");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawReference {
    /// Dotted target name; may be empty for a bare relative reference
    target: String,
    /// Levels up from the requesting module; 0 means absolute
    level: usize,
}

impl RawReference {
    /// Creates an absolute reference (level 0)
    pub fn absolute(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            level: 0,
        }
    }

    /// Creates a relative reference at the given level (level >= 1)
    pub fn relative(target: impl Into<String>, level: usize) -> Self {
        debug_assert!(level >= 1, "relative references carry a level of at least 1");
        Self {
            target: target.into(),
            level,
        }
    }

    /// Returns the dotted target name
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the "levels up" count; 0 for absolute references
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns true if the reference is absolute
    pub fn is_absolute(&self) -> bool {
        self.level == 0
    }
}

impl fmt::Display for RawReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.level {
            write!(f, ".")?;
        }
        write!(f, "{}", self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_reference() {
        let reference = RawReference::absolute("pkg.util");
        assert!(reference.is_absolute());
        assert_eq!(reference.level(), 0);
        assert_eq!(reference.target(), "pkg.util");
    }

    #[test]
    fn test_relative_reference() {
        let reference = RawReference::relative("support.reader", 2);
        assert!(!reference.is_absolute());
        assert_eq!(reference.level(), 2);
    }

    #[test]
    fn test_bare_relative_reference() {
        let reference = RawReference::relative("", 1);
        assert_eq!(reference.target(), "");
        assert_eq!(reference.level(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(RawReference::absolute("pkg.util").to_string(), "pkg.util");
        assert_eq!(RawReference::relative("reader", 2).to_string(), "..reader");
    }
}
