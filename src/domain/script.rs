//! Script Assembler
//!
//! Composes per-host tasks into the two top-level scripts:
//! - `run`: push + exec for every host
//! - `clean`: teardown for every host
//!
//! In [`PushMode::Parallel`] the push commands of all hosts become
//! background jobs followed by a single barrier, and every exec comes after
//! that barrier. Pushes of different hosts may interleave; no host's
//! session restarts before its own pushes have finished.

use std::fmt;

use crate::domain::entities::Task;
use crate::domain::value_objects::CommandKind;

/// Header of every generated script: bash, abort on error, trace commands
pub const SCRIPT_HEADER: &str = "#!/usr/bin/env bash\nset -xe\n";

/// Array collecting background push job ids
const PUSH_PIDS: &str = "FIRE_PUSH_PIDS";

/// How the push phase of the run script is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PushMode {
    /// Each host's pushes run inline, right before its exec
    #[default]
    Sequential,
    /// All pushes run as background jobs, joined by one barrier
    Parallel,
}

impl PushMode {
    pub fn from_parallel(parallel: bool) -> Self {
        if parallel {
            PushMode::Parallel
        } else {
            PushMode::Sequential
        }
    }
}

/// A complete shell script behind the fail-fast header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript {
    body: String,
}

impl GeneratedScript {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GeneratedScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SCRIPT_HEADER)?;
        f.write_str(&self.body)
    }
}

/// Builds run and clean scripts from tasks
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptAssembler {
    push_mode: PushMode,
}

impl ScriptAssembler {
    pub fn new(push_mode: PushMode) -> Self {
        Self { push_mode }
    }

    /// Run script: every host's push phase and exec phase
    pub fn run_script(&self, tasks: &[Task]) -> GeneratedScript {
        match self.push_mode {
            PushMode::Sequential => GeneratedScript::new(concat_exports(tasks)),
            PushMode::Parallel => GeneratedScript::new(parallel_body(tasks)),
        }
    }

    /// Clean script: each host's teardown, no cross-host ordering
    pub fn clean_script(&self, tasks: &[Task]) -> GeneratedScript {
        GeneratedScript::new(concat_exports(tasks))
    }
}

fn concat_exports(tasks: &[Task]) -> String {
    tasks.iter().map(Task::export).collect()
}

fn parallel_body(tasks: &[Task]) -> String {
    let pushes: Vec<&str> = tasks
        .iter()
        .flat_map(|t| t.commands_of(CommandKind::Push))
        .collect();

    let mut lines: Vec<String> = Vec::new();
    if !pushes.is_empty() {
        lines.push(format!("{}=()", PUSH_PIDS));
        for push in pushes {
            lines.push(format!("{} & {}+=($!)", push, PUSH_PIDS));
        }
        lines.push(barrier());
    }

    for task in tasks {
        lines.extend(
            task.commands()
                .iter()
                .filter(|c| c.kind() != CommandKind::Push)
                .map(|c| c.text().to_string()),
        );
    }

    if lines.is_empty() {
        return String::new();
    }
    let mut body = lines.join("\n");
    body.push('\n');
    body
}

/// Waits on each job id so a failed push fails the script here
fn barrier() -> String {
    format!(
        "for pid in \"${{{arr}[@]}}\"; do wait \"$pid\"; done",
        arr = PUSH_PIDS
    )
}
