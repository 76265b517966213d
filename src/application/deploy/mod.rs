//! Deploy Module
//!
//! The deployment driver: resolved options in, generated files out.
//!
//! ## Structure
//!
//! - `options` - Validated input (`DeployOptions`, `HostPlan`)
//! - `result` - Result types (`DeployResult`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use fire::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let options = DeployOptions::from_config(&config)?;
//! let use_case = DeployUseCase::new(LocalFs::new(), ProviderRegistry::with_builtins(None));
//! let result = use_case.execute(&options)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{DeployOptions, HostPlan, CLEAN_SCRIPT, CONFIG_FILE, RUN_SCRIPT};
pub use result::DeployResult;
pub use use_case::DeployUseCase;

#[cfg(test)]
mod tests;
