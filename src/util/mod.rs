//! Shared utilities

pub mod config;
pub mod context;
pub mod fs;

pub use config::{Config, ScanConfig};
pub use context::GlobalContext;
