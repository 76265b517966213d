//! Hands a generated script to bash
//!
//! Fire never talks to remote hosts itself; the script does, and its exit
//! status is all that comes back.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::FireResult;

/// Interpreter used for generated scripts
pub const SHELL: &str = "bash";

/// Run `bash <script>` with inherited stdio and wait for it
pub fn run_script(script: &Path) -> FireResult<ExitStatus> {
    tracing::info!(script = %script.display(), "executing script");
    let status = Command::new(SHELL)
        .arg(script)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;
    if !status.success() {
        tracing::warn!(script = %script.display(), code = ?status.code(), "script failed");
    }
    Ok(status)
}

/// Check if bash is installed and available
pub fn check_available() -> bool {
    Command::new(SHELL)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
