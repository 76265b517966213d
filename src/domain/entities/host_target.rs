//! HostTarget entity - a task plus what to push and how to start it

use std::path::{Path, PathBuf};

use crate::domain::entities::Task;
use crate::domain::value_objects::EnvVars;
use crate::error::FireResult;

/// Remote entry command with `{entry}`, `{config}` and `{index}` placeholders
///
/// Placeholders are replaced by the pushed file names (the session runs
/// inside the task directory) and the host's 0-based index. Anything else
/// in braces is left as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationTemplate(String);

impl InvocationTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self, entry: &str, config: &str, index: usize) -> String {
        self.0
            .replace("{entry}", entry)
            .replace("{config}", config)
            .replace("{index}", &index.to_string())
    }
}

impl Default for InvocationTemplate {
    fn default() -> Self {
        Self::new("python {entry} {index} {config}")
    }
}

/// Everything needed to deploy to one host
#[derive(Debug, Clone)]
pub struct HostTarget {
    pub task: Task,
    /// Local application entry file
    pub entry: PathBuf,
    /// Local JSON config file shared by all hosts
    pub config: PathBuf,
    pub invocation: InvocationTemplate,
    pub env: EnvVars,
}

impl HostTarget {
    /// Push entry and config, then (re)start the session
    pub fn run_task(&self, index: usize) -> FireResult<Task> {
        let command = self.invocation.render(
            &file_name(&self.entry),
            &file_name(&self.config),
            index,
        );
        Ok(self
            .task
            .push(&self.entry)?
            .push(&self.config)?
            .exec(&command, &self.env))
    }

    /// Tear the host down
    pub fn clean_task(&self) -> Task {
        self.task.clean()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CommandKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn invocation_replaces_all_placeholders() {
        let tpl = InvocationTemplate::new("/opt/py/bin/python {entry} {index} {config}");
        assert_eq!(
            tpl.render("app.py", "config.json", 1),
            "/opt/py/bin/python app.py 1 config.json"
        );
    }

    #[test]
    fn invocation_leaves_unknown_placeholders() {
        let tpl = InvocationTemplate::new("run {entry} --mode {mode}");
        assert_eq!(tpl.render("a", "b", 0), "run a --mode {mode}");
    }

    #[test]
    fn run_task_pushes_both_artifacts_then_execs() {
        let dir = tempdir().unwrap();
        let entry = dir.path().join("app.py");
        let config = dir.path().join("config.json");
        fs::write(&entry, "").unwrap();
        fs::write(&config, "[]").unwrap();

        let target = HostTarget {
            task: Task::new("app", "khanh@h1").unwrap(),
            entry: entry.clone(),
            config,
            invocation: InvocationTemplate::default(),
            env: EnvVars::from_pairs([("NAME", "khanh")]).unwrap(),
        };

        let task = target.run_task(1).unwrap();
        let kinds: Vec<_> = task.commands().iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![CommandKind::Push, CommandKind::Push, CommandKind::Exec]
        );
        let exec = task.commands()[2].text();
        assert!(exec.contains("export NAME=khanh; python app.py 1 config.json"));
        // the template value itself is untouched
        assert!(target.task.commands().is_empty());
    }

    #[test]
    fn run_task_fails_when_entry_missing() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.json");
        fs::write(&config, "[]").unwrap();

        let target = HostTarget {
            task: Task::new("app", "u@h").unwrap(),
            entry: dir.path().join("nope.py"),
            config,
            invocation: InvocationTemplate::default(),
            env: EnvVars::new(),
        };
        assert!(target.run_task(0).is_err());
    }
}
