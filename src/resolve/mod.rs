//! Reference extraction and resolution into the dependency graph
//!
//! This module hides how import references are recognized and resolved.
//! Extraction is pluggable via [`ReferenceExtractor`]; resolution against
//! the registry is [`GraphBuilder`]'s job.

mod builder;
mod error;
mod extractor;
mod reference;

pub use builder::GraphBuilder;
pub use error::{ExtractError, ExtractResult};
pub use extractor::{PythonExtractor, ReferenceExtractor};
pub use reference::RawReference;
