//! Task entity - the immutable per-host accumulation of remote commands
//!
//! Every command-producing operation borrows the receiver and returns a new
//! `Task` with exactly one more rendered command; the receiver is never
//! touched.

use std::path::Path;

use crate::domain::sanitize::{check_command, UNSAFE_COMMAND_NOTICE};
use crate::domain::templates::{CleanParams, ExecParams, PushParams};
use crate::domain::value_objects::{CommandKind, DeployDir, EnvVars, HostName, TaskName};
use crate::error::{FireError, FireResult};

/// Multiplexer binary used when none is given
pub const DEFAULT_SUPERVISOR: &str = "tmux";

/// One rendered shell command plus the operation that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCommand {
    kind: CommandKind,
    text: String,
}

impl RenderedCommand {
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A deployment task for one host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: TaskName,
    host: HostName,
    deploy_dir: DeployDir,
    supervisor: String,
    commands: Vec<RenderedCommand>,
}

impl Task {
    /// Create an empty task, validating name and host
    pub fn new(name: &str, host: &str) -> FireResult<Self> {
        Ok(Self::from_parts(TaskName::new(name)?, HostName::parse(host)?))
    }

    /// Create an empty task from already-validated parts
    pub fn from_parts(name: TaskName, host: HostName) -> Self {
        Self {
            name,
            host,
            deploy_dir: DeployDir::default(),
            supervisor: DEFAULT_SUPERVISOR.to_string(),
            commands: Vec::new(),
        }
    }

    /// Set the remote deploy root
    pub fn with_deploy_dir(mut self, deploy_dir: DeployDir) -> Self {
        self.deploy_dir = deploy_dir;
        self
    }

    /// Set the path of the multiplexer binary on the remote host
    pub fn with_supervisor(mut self, supervisor: impl Into<String>) -> Self {
        self.supervisor = supervisor.into();
        self
    }

    pub fn name(&self) -> &TaskName {
        &self.name
    }

    pub fn host(&self) -> &HostName {
        &self.host
    }

    pub fn deploy_dir(&self) -> &str {
        self.deploy_dir.as_str()
    }

    pub fn supervisor(&self) -> &str {
        &self.supervisor
    }

    /// Remote directory the task's artifacts land in
    pub fn task_dir(&self) -> String {
        format!("{}/{}", self.deploy_dir, self.name)
    }

    pub fn commands(&self) -> &[RenderedCommand] {
        &self.commands
    }

    /// Commands of one kind, in append order
    pub fn commands_of(&self, kind: CommandKind) -> impl Iterator<Item = &str> {
        self.commands
            .iter()
            .filter(move |c| c.kind == kind)
            .map(RenderedCommand::text)
    }

    fn append(&self, kind: CommandKind, text: String) -> Task {
        tracing::debug!(task = %self.name, host = %self.host, %kind, "rendered command");
        let mut next = self.clone();
        next.commands.push(RenderedCommand { kind, text });
        next
    }

    /// Sync a local file into the task directory on the host
    ///
    /// Fails without rendering anything if `source` does not exist locally.
    pub fn push(&self, source: impl AsRef<Path>) -> FireResult<Task> {
        let source = source.as_ref();
        if !source.exists() {
            return Err(FireError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }
        let source = source.to_string_lossy();
        let text = PushParams {
            source: &source,
            host: self.host.as_str(),
            deploy_dir: self.deploy_dir.as_str(),
            task: self.name.as_str(),
        }
        .render();
        Ok(self.append(CommandKind::Push, text))
    }

    /// (Re)start the supervised session running `command` with `env`
    ///
    /// An existing session with the task's name is killed first, so running
    /// the result twice leaves exactly one session.
    pub fn exec(&self, command: &str, env: &EnvVars) -> Task {
        check_command(command, self.name.as_str(), &UNSAFE_COMMAND_NOTICE);
        let env = env.render();
        let text = ExecParams {
            host: self.host.as_str(),
            deploy_dir: self.deploy_dir.as_str(),
            task: self.name.as_str(),
            supervisor: &self.supervisor,
            env: &env,
            command,
        }
        .render();
        self.append(CommandKind::Exec, text)
    }

    /// Kill the session if present and remove the task directory
    pub fn clean(&self) -> Task {
        let text = CleanParams {
            host: self.host.as_str(),
            deploy_dir: self.deploy_dir.as_str(),
            task: self.name.as_str(),
            supervisor: &self.supervisor,
        }
        .render();
        self.append(CommandKind::Clean, text)
    }

    /// All commands joined by newlines, with one trailing newline
    pub fn export(&self) -> String {
        let mut out = self
            .commands
            .iter()
            .map(RenderedCommand::text)
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }
}
