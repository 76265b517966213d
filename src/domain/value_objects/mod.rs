//! Domain Value Objects
//!
//! Immutable, validated values that every task is built from.

mod command_kind;
mod config_warning;
mod deploy_dir;
mod env_vars;
mod host_name;
mod task_name;

pub use command_kind::CommandKind;
pub use config_warning::ConfigWarning;
pub use deploy_dir::{DeployDir, DEFAULT_DEPLOY_DIR};
pub use env_vars::EnvVars;
pub use host_name::HostName;
pub use task_name::TaskName;
