//! Task name value object - names the remote session and deploy subdirectory

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FireError, FireResult};

/// Name of a deployment task
///
/// Doubles as the multiplexer session name and as the directory under the
/// deploy root, and is interpolated unquoted into both. Only
/// `[A-Za-z0-9_-]` is allowed: anything else either splits into several
/// shell words or is rejected by tmux as a target (`.` and `:`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskName(String);

impl TaskName {
    pub fn new(name: impl Into<String>) -> FireResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(FireError::EmptyTaskName);
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(FireError::InvalidTaskName { name });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TaskName {
    type Error = FireError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskName> for String {
    fn from(name: TaskName) -> Self {
        name.0
    }
}
