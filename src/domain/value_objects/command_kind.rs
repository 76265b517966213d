//! Kind of a rendered remote command

/// Which remote operation produced a command
///
/// The script assembler uses this to split a task into its push phase and
/// the rest when fanning pushes out in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// File transfer to the deploy directory
    Push,
    /// Session restart running the application
    Exec,
    /// Session teardown and directory removal
    Clean,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Push => "push",
            CommandKind::Exec => "exec",
            CommandKind::Clean => "clean",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
