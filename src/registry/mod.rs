//! Module identities and the identity <-> file path registry
//!
//! This module hides how identities are derived from storage paths. The rest
//! of the crate only sees opaque [`ModuleId`] tokens and the registry's
//! lookup operations.

mod module_id;
mod module_registry;

pub use module_id::{ModuleId, JOIN_CHAR};
pub use module_registry::{IdentityCollision, ModuleRegistry, SOURCE_FILE_EXTENSION};
