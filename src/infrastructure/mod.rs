//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - local file system (atomic, executable-aware writes)
//! - `providers` - built-in config providers and their registry
//! - `shell` - runs a generated script with bash

pub mod fs;
pub mod providers;
pub mod shell;

// Re-export for convenience
pub use fs::LocalFs;
pub use providers::{FnProvider, HostRecordProvider, ProviderRegistry, StaticFileProvider};
