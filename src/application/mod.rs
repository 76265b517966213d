//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports, script assembly)
//! - Does NOT contain rendering rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - turns a resolved config into config.json, run and clean

pub mod deploy;

pub use deploy::{DeployOptions, DeployResult, DeployUseCase, HostPlan};
