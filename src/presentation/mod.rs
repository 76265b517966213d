//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - clap definitions
//! - `factory` - Creates use cases with proper dependencies
//! - `output` - Summary rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use factory::create_deploy_use_case;
