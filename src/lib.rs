//! nmod - operations on nested Go modules
//!
//! This crate provides the library behind the `nmod` CLI: locating
//! `go.mod` manifests above and below a directory, reading their module
//! declarations, and mapping modules to the directories they own.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::{ManifestRef, Module, NmodError, NmodResult};
pub use util::context::GlobalContext;
