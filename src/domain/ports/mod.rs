//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod config_provider;
pub mod file_system;

pub use config_provider::ConfigProvider;
pub use file_system::FileSystem;
