//! Advisory scanning of exec command text
//!
//! Command text is interpolated verbatim into a remote shell. This module
//! only *detects* shell metacharacters and reports them; it never rewrites
//! or rejects the command. Callers handling untrusted input need structural
//! escaping or an allow-list on top of this.

use std::sync::atomic::{AtomicBool, Ordering};

/// Characters that change how the remote shell parses the command
pub const SHELL_METACHARACTERS: &[char] = &[
    ';', '&', '|', '`', '$', '>', '<', '(', ')', '"', '\'', '\\', '\n',
];

/// Process-wide latch for the one-time "command text is not escaped" notice
pub static UNSAFE_COMMAND_NOTICE: WarnOnce = WarnOnce::new();

/// A flag that flips exactly once
#[derive(Debug, Default)]
pub struct WarnOnce {
    warned: AtomicBool,
}

impl WarnOnce {
    pub const fn new() -> Self {
        Self {
            warned: AtomicBool::new(false),
        }
    }

    /// Has the warning been emitted already?
    pub fn already_warned(&self) -> bool {
        self.warned.load(Ordering::Acquire)
    }

    /// Mark as warned; returns true only for the first caller
    pub fn mark(&self) -> bool {
        !self.warned.swap(true, Ordering::AcqRel)
    }
}

/// Result of scanning one command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandScan {
    /// Distinct metacharacters found, in order of first appearance
    pub found: Vec<char>,
}

impl CommandScan {
    pub fn is_clean(&self) -> bool {
        self.found.is_empty()
    }

    fn describe(&self) -> String {
        self.found
            .iter()
            .map(|c| match c {
                '\n' => "\\n".to_string(),
                c => c.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Scan command text for shell metacharacters
pub fn scan_command(command: &str) -> CommandScan {
    let mut found = Vec::new();
    for c in command.chars() {
        if SHELL_METACHARACTERS.contains(&c) && !found.contains(&c) {
            found.push(c);
        }
    }
    CommandScan { found }
}

/// Scan and log; the command is still used as-is by the caller
pub fn check_command(command: &str, task: &str, notice: &WarnOnce) -> CommandScan {
    let scan = scan_command(command);
    if scan.is_clean() {
        return scan;
    }

    tracing::warn!(
        task,
        chars = %scan.describe(),
        "exec command contains shell metacharacters: {}",
        command
    );
    if notice.mark() {
        tracing::warn!(
            "exec command text is passed to the remote shell unescaped; \
             only use fire with commands from a trusted source"
        );
    }
    scan
}
