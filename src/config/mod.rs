//! Configuration module for Fire
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FIRE_*)
//! 3. Project config (fire.toml, or --config PATH)
//! 4. User config (<config dir>/fire/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, with_env_overrides_from,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, HostConfig};
