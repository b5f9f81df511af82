//! Core data structures and searches for nmod.
//!
//! This module contains the foundational pieces the resolver builds on:
//! - Manifest references and module declaration parsing
//! - Modules (name + root directory)
//! - Upward and downward manifest searches
//! - The error taxonomy

pub mod errors;
pub mod manifest;
pub mod module;
pub mod search;

pub use errors::{NmodError, NmodResult};
pub use manifest::{read_module_name, ManifestRef, MANIFEST_NAME};
pub use module::Module;
pub use search::{owned_dirs, search_downward, search_upward};
