//! Template Renderer
//!
//! One parameter record per remote operation (push, exec, clean), each with
//! a pure `render` that produces a shell fragment without a trailing
//! newline.
//!
//! Structural contract of the ssh templates:
//! - the remote sequence is a here-document fed to `ssh`
//! - `set -xe` is the first remote line
//! - `kill-session` only runs behind a successful `has-session`

/// Flags passed to rsync for every push
pub const RSYNC_FLAGS: &str = "-avh --delete --progress";

/// Here-document terminator
pub const HEREDOC_END: &str = "EOF";

/// Name of the log file inside the task directory
pub const LOG_FILE: &str = "run.log";

/// Parameters for the push (file transfer) template
#[derive(Debug, Clone, Copy)]
pub struct PushParams<'a> {
    pub source: &'a str,
    pub host: &'a str,
    pub deploy_dir: &'a str,
    pub task: &'a str,
}

impl PushParams<'_> {
    pub fn render(&self) -> String {
        format!(
            "rsync {flags} {src} {host}:{dir}/{task}/",
            flags = RSYNC_FLAGS,
            src = quote_arg(self.source),
            host = self.host,
            dir = self.deploy_dir,
            task = self.task,
        )
    }
}

/// Parameters for the exec (session restart) template
#[derive(Debug, Clone, Copy)]
pub struct ExecParams<'a> {
    pub host: &'a str,
    pub deploy_dir: &'a str,
    pub task: &'a str,
    pub supervisor: &'a str,
    /// Already-escaped `NAME=value ...` fragment, empty for no variables
    pub env: &'a str,
    /// Raw command text, interpolated verbatim
    pub command: &'a str,
}

impl ExecParams<'_> {
    pub fn render(&self) -> String {
        let task_dir = format!("{}/{}", self.deploy_dir, self.task);
        let session_body = if self.env.is_empty() {
            format!("{} |& tee {}/{}", self.command, task_dir, LOG_FILE)
        } else {
            format!(
                "export {}; {} |& tee {}/{}",
                embed_in_heredoc_quotes(self.env),
                self.command,
                task_dir,
                LOG_FILE
            )
        };

        [
            format!("ssh {} << {}", self.host, HEREDOC_END),
            "    set -xe".to_string(),
            format!("    {}", session_guard(self.supervisor, self.task)),
            format!("    cd {}", task_dir),
            format!(
                "    {} new-session -s {} -d \"{}\"",
                self.supervisor, self.task, session_body
            ),
            HEREDOC_END.to_string(),
        ]
        .join("\n")
    }
}

/// Parameters for the clean (teardown) template
#[derive(Debug, Clone, Copy)]
pub struct CleanParams<'a> {
    pub host: &'a str,
    pub deploy_dir: &'a str,
    pub task: &'a str,
    pub supervisor: &'a str,
}

impl CleanParams<'_> {
    pub fn render(&self) -> String {
        [
            format!("ssh {} << {}", self.host, HEREDOC_END),
            "    set -xe".to_string(),
            format!("    {}", session_guard(self.supervisor, self.task)),
            format!("    rm -rf {}/{}", self.deploy_dir, self.task),
            HEREDOC_END.to_string(),
        ]
        .join("\n")
    }
}

/// Kill the session only if it exists; a no-op (not an error) otherwise
fn session_guard(supervisor: &str, task: &str) -> String {
    format!(
        "{tmux} has-session -t {task} 2> /dev/null && {tmux} kill-session -t {task}",
        tmux = supervisor,
        task = task
    )
}

/// Single-quote an argument unless it is made of safe characters only
pub(crate) fn quote_arg(s: &str) -> String {
    let safe = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | '@' | ':' | ',' | '+' | '='));
    if safe {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}

/// Escape an already shell-escaped fragment so it survives, in order, the
/// local unquoted here-document and the remote double-quoted argument.
fn embed_in_heredoc_quotes(fragment: &str) -> String {
    let mut quoted = String::with_capacity(fragment.len() * 2);
    for c in fragment.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    let mut out = String::with_capacity(quoted.len() * 2);
    for c in quoted.chars() {
        if matches!(c, '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
