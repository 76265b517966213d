//! Deploy Options
//!
//! Validated, fully resolved input for the deploy use case.

use std::path::{Path, PathBuf};

use crate::config::{Config, HostConfig};
use crate::domain::entities::{HostTarget, InvocationTemplate, Task};
use crate::domain::script::PushMode;
use crate::domain::value_objects::{DeployDir, EnvVars, HostName, TaskName};
use crate::error::{FireError, FireResult};

/// File name of the generated config payload
pub const CONFIG_FILE: &str = "config.json";
/// File name of the generated run script
pub const RUN_SCRIPT: &str = "run";
/// File name of the generated clean script
pub const CLEAN_SCRIPT: &str = "clean";

/// One host with its resolved overrides
#[derive(Debug, Clone)]
pub struct HostPlan {
    pub host: HostName,
    pub deploy_dir: DeployDir,
    pub supervisor: String,
    pub invocation: InvocationTemplate,
    pub env: EnvVars,
}

impl HostPlan {
    fn resolve(config: &Config, base_env: &EnvVars, entry: &HostConfig) -> FireResult<Self> {
        let host_env = EnvVars::from_pairs(entry.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
        Ok(Self {
            host: HostName::parse(entry.host.as_str())?,
            deploy_dir: DeployDir::new(
                entry
                    .deploy_dir
                    .clone()
                    .unwrap_or_else(|| config.deploy_dir.clone()),
            )?,
            supervisor: entry
                .supervisor
                .clone()
                .unwrap_or_else(|| config.supervisor.clone()),
            invocation: InvocationTemplate::new(
                entry.command.clone().unwrap_or_else(|| config.command.clone()),
            ),
            env: base_env.merged(&host_env),
        })
    }

    /// The host's deployment target for `task`
    pub fn target(&self, task: &TaskName, entry: &Path, config: &Path) -> HostTarget {
        HostTarget {
            task: Task::from_parts(task.clone(), self.host.clone())
                .with_deploy_dir(self.deploy_dir.clone())
                .with_supervisor(self.supervisor.as_str()),
            entry: entry.to_path_buf(),
            config: config.to_path_buf(),
            invocation: self.invocation.clone(),
            env: self.env.clone(),
        }
    }
}

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    pub task: TaskName,
    /// Local application entry file
    pub entry: PathBuf,
    /// Hosts in index order
    pub hosts: Vec<HostPlan>,
    /// Directory receiving config.json, run and clean
    pub output_dir: PathBuf,
    pub push_mode: PushMode,
    /// Config provider name
    pub provider: String,
}

impl DeployOptions {
    /// Validate a loaded config; nothing is written if this fails
    pub fn from_config(config: &Config) -> FireResult<Self> {
        let task = TaskName::new(config.task.as_str())?;
        let entry = config.entry.clone().ok_or(FireError::MissingEntry)?;
        if config.hosts.is_empty() {
            return Err(FireError::NoHosts);
        }

        let base_env =
            EnvVars::from_pairs(config.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
        let hosts = config
            .hosts
            .iter()
            .map(|h| HostPlan::resolve(config, &base_env, h))
            .collect::<FireResult<Vec<_>>>()?;

        Ok(Self {
            task,
            entry,
            hosts,
            output_dir: config.output_dir.clone(),
            push_mode: PushMode::from_parallel(config.parallel_push),
            provider: config.provider.clone(),
        })
    }

    pub fn host_names(&self) -> Vec<HostName> {
        self.hosts.iter().map(|h| h.host.clone()).collect()
    }

    pub fn config_path(&self) -> PathBuf {
        self.output_dir.join(CONFIG_FILE)
    }

    pub fn run_path(&self) -> PathBuf {
        self.output_dir.join(RUN_SCRIPT)
    }

    pub fn clean_path(&self) -> PathBuf {
        self.output_dir.join(CLEAN_SCRIPT)
    }
}
