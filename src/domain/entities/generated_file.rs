//! GeneratedFile entity - a file Fire writes to local disk
//!
//! Scripts are written executable; the config payload is not.

use std::path::PathBuf;

/// A generated file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Where this file should be written
    path: PathBuf,
    /// Full file content
    content: String,
    /// Whether to set the executable bits
    executable: bool,
}

impl GeneratedFile {
    /// A plain data file
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            executable: false,
        }
    }

    /// A script written with mode 0755
    pub fn script(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            executable: true,
            ..Self::new(path, content)
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_executable(&self) -> bool {
        self.executable
    }
}
