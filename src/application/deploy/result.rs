//! Deploy Result
//!
//! Result types for deploy operations.

use std::path::PathBuf;

use crate::domain::script::GeneratedScript;

/// Result of a deploy operation
#[derive(Debug, Clone)]
pub struct DeployResult {
    /// Files that were written, in write order
    pub written: Vec<PathBuf>,
    pub config_path: PathBuf,
    pub run_path: PathBuf,
    pub clean_path: PathBuf,
    pub run_script: GeneratedScript,
    pub clean_script: GeneratedScript,
    pub host_count: usize,
}
