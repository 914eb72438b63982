//! Module identifier type
//!
//! This module defines the ModuleId type which canonically identifies one
//! source file for dependency purposes. The identity is derived from the
//! file's storage path (see [`ModuleRegistry`](super::ModuleRegistry)), with
//! path separators replaced by `.` and the source extension stripped.
//!
//! # Design Decision
//!
//! We use a dotted string token rather than the file path itself because:
//! 1. It matches the shape import references take in source text, so
//!    resolution is a string comparison rather than path arithmetic
//! 2. It is human-readable in diagnostics (`pkg.support.reader`)
//! 3. It is totally ordered, which keeps tie-breaking well defined

use serde::{Deserialize, Serialize};
use std::fmt;

/// The character joining path segments into a module identity.
pub const JOIN_CHAR: char = '.';

/// Canonical identity of one source module within a sorting run
///
/// # Examples
///
/// ```
/// use taxis::ModuleId;
///
/// let id = ModuleId::new("pkg.support.reader");
/// assert_eq!(id.as_str(), "pkg.support.reader");
/// assert_eq!(id.segments().count(), 3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    /// Creates a ModuleId from a dotted name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Joins segments into a ModuleId, skipping empty ones
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let joined = segments
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(&JOIN_CHAR.to_string());
        Self(joined)
    }

    /// Returns the identity as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates the dot-separated segments of the identity
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(JOIN_CHAR)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({})", self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ModuleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_id_creation() {
        let id = ModuleId::new("pkg.util");
        assert_eq!(id.as_str(), "pkg.util");
    }

    #[test]
    fn test_module_id_segments() {
        let id = ModuleId::new("pkg.support.reader");
        let segments: Vec<_> = id.segments().collect();
        assert_eq!(segments, vec!["pkg", "support", "reader"]);
    }

    #[test]
    fn test_module_id_from_segments_skips_empty() {
        let id = ModuleId::from_segments(["pkg", "", "util"]);
        assert_eq!(id.as_str(), "pkg.util");
    }

    #[test]
    fn test_module_id_equality_and_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(ModuleId::new("a"));
        set.insert(ModuleId::new("b"));
        set.insert(ModuleId::new("a")); // duplicate

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_module_id_ordering() {
        let mut ids = vec![
            ModuleId::new("pkg.b"),
            ModuleId::new("pkg.a"),
            ModuleId::new("aaa"),
        ];
        ids.sort();
        assert_eq!(ids[0].as_str(), "aaa");
        assert_eq!(ids[2].as_str(), "pkg.b");
    }

    #[test]
    fn test_module_id_display() {
        let id = ModuleId::new("pkg.util");
        assert_eq!(format!("{}", id), "pkg.util");
        assert_eq!(format!("{:?}", id), "ModuleId(pkg.util)");
    }
}
