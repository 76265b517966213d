//! Configuration type definitions

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::entities::DEFAULT_SUPERVISOR;
use crate::domain::value_objects::DEFAULT_DEPLOY_DIR;
use crate::infrastructure::providers::DEFAULT_PROVIDER;

/// Deployment file (`fire.toml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Session and directory name on every host
    #[serde(default = "default_task")]
    pub task: String,

    /// Local application entry file
    #[serde(default)]
    pub entry: Option<PathBuf>,

    /// Remote entry command; `{entry}`, `{config}`, `{index}` are substituted
    #[serde(default = "default_command")]
    pub command: String,

    /// Where `run`, `clean` and `config.json` are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Fan pushes out as background jobs
    #[serde(default)]
    pub parallel_push: bool,

    /// Config provider name
    #[serde(default = "default_provider")]
    pub provider: String,

    /// JSON array file for the `static` provider
    #[serde(default)]
    pub provider_file: Option<PathBuf>,

    /// Default remote deploy root
    #[serde(default = "default_deploy_dir")]
    pub deploy_dir: String,

    /// Default multiplexer binary
    #[serde(default = "default_supervisor")]
    pub supervisor: String,

    /// Variables exported on every host
    #[serde(default)]
    pub env: IndexMap<String, String>,

    #[serde(default)]
    pub hosts: Vec<HostConfig>,
}

/// Per-host entry; unset fields fall back to the top-level values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    pub host: String,

    #[serde(default)]
    pub deploy_dir: Option<String>,

    #[serde(default)]
    pub supervisor: Option<String>,

    #[serde(default)]
    pub command: Option<String>,

    /// Layered over the top-level `env`
    #[serde(default)]
    pub env: IndexMap<String, String>,
}

impl HostConfig {
    /// Host entry with no overrides
    pub fn bare(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            deploy_dir: None,
            supervisor: None,
            command: None,
            env: IndexMap::new(),
        }
    }
}

fn default_task() -> String {
    "app".to_string()
}

fn default_command() -> String {
    "python {entry} {index} {config}".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("tmp")
}

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}

fn default_deploy_dir() -> String {
    DEFAULT_DEPLOY_DIR.to_string()
}

fn default_supervisor() -> String {
    DEFAULT_SUPERVISOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            task: default_task(),
            entry: None,
            command: default_command(),
            output_dir: default_output_dir(),
            parallel_push: false,
            provider: default_provider(),
            provider_file: None,
            deploy_dir: default_deploy_dir(),
            supervisor: default_supervisor(),
            env: IndexMap::new(),
            hosts: Vec::new(),
        }
    }
}

impl Config {
    /// Replace the host list with `hosts`, keeping overrides of entries
    /// that name the same host
    pub fn with_hosts(mut self, hosts: &[String]) -> Self {
        let previous = std::mem::take(&mut self.hosts);
        self.hosts = hosts
            .iter()
            .map(|h| {
                previous
                    .iter()
                    .find(|p| &p.host == h)
                    .cloned()
                    .unwrap_or_else(|| HostConfig::bare(h.clone()))
            })
            .collect();
        self
    }
}
