//! Reference extraction capability
//!
//! Extraction is source-language-specific, so it lives behind the
//! [`ReferenceExtractor`] trait: the graph builder and the orderer never
//! see source text, only [`RawReference`] values. Swapping the extractor
//! reuses the whole pipeline for a different source ecosystem.
//!
//! The bundled [`PythonExtractor`] is deliberately lexical: it scans
//! import statements line by line instead of parsing the file. That keeps
//! it dependency-light and tolerant of partially invalid sources, at the
//! cost of the occasional false positive inside string literals. False
//! positives are harmless here because unresolvable references are dropped
//! during resolution anyway.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{ExtractError, ExtractResult};
use super::reference::RawReference;

/// Capability to extract raw import references from one source file
pub trait ReferenceExtractor {
    /// Returns the references found in the file's source, in source order
    fn extract(&self, path: &Path) -> ExtractResult<Vec<RawReference>>;
}

/// `from <dots><target> import ...`; dots carry the relative level.
static FROM_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*from\s+(\.*)([\w][\w.]*)?\s+import\s").expect("from-import pattern")
});

/// `import a.b, c as d`; the target list is split afterwards.
static PLAIN_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*import\s+(.+)$").expect("import pattern"));

/// Line-based extractor for Python-style import statements
///
/// Recognized forms:
/// - `import a.b` and `import a, b.c as alias` (absolute targets)
/// - `from pkg.mod import x` (absolute target `pkg.mod`)
/// - `from ..pkg import x` (target `pkg` at level 2)
/// - `from . import x` (bare relative, level 1)
///
/// Indented imports (inside functions) are included; comment lines are
/// skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonExtractor;

impl PythonExtractor {
    /// Creates a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Extracts references from already-loaded source text
    pub fn extract_from_source(&self, source: &str) -> Vec<RawReference> {
        let mut references = Vec::new();

        for line in source.lines() {
            if line.trim_start().starts_with('#') {
                continue;
            }

            if let Some(captures) = FROM_IMPORT.captures(line) {
                let level = captures.get(1).map_or(0, |dots| dots.as_str().len());
                let target = captures.get(2).map_or("", |m| m.as_str());
                if level == 0 {
                    if !target.is_empty() {
                        references.push(RawReference::absolute(target));
                    }
                } else {
                    references.push(RawReference::relative(target, level));
                }
                continue;
            }

            if let Some(captures) = PLAIN_IMPORT.captures(line) {
                for part in captures[1].split(',') {
                    // `a.b as alias` keeps only the module name
                    if let Some(name) = part.split_whitespace().next() {
                        references.push(RawReference::absolute(name));
                    }
                }
            }
        }

        references
    }
}

impl ReferenceExtractor for PythonExtractor {
    fn extract(&self, path: &Path) -> ExtractResult<Vec<RawReference>> {
        let source = fs::read_to_string(path).map_err(|err| ExtractError::io(path, err))?;
        Ok(self.extract_from_source(&source))
    }
}
