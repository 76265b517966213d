//! Fire - fan-out deployment script generator
//!
//! Fire builds, per host, an immutable task of rendered shell commands
//! (rsync push, tmux session restart, teardown) and assembles them into a
//! fail-fast `run` script and a `clean` script. Executing those scripts is
//! left to bash; Fire itself never opens a connection.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{HostTarget, InvocationTemplate, Task};
pub use domain::script::{GeneratedScript, PushMode, ScriptAssembler};
pub use domain::value_objects::{EnvVars, HostName, TaskName};
pub use error::{FireError, FireResult};
