//! High-level operations.
//!
//! This module contains the module resolver behind each nmod command.
//! Every operation computes its full result before returning, so a
//! failure never leaves partial output behind.

pub mod dirs;
pub mod modules;
pub mod rootdirs;
pub mod scan;

pub use dirs::dirs;
pub use modules::{modules, ModulesOptions};
pub use rootdirs::rootdirs;
pub use scan::{default_manifests, default_modules, resolve_modules};
