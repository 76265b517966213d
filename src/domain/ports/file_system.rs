//! FileSystem port - local persistence of generated files
//!
//! Writes must never leave a partially written file in place.

use std::path::Path;

use crate::error::FireResult;

/// Abstract file system interface
///
/// `LocalFs` is the only implementation: atomic writes to local disk.
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FireResult<String>;

    /// Write content atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FireResult<()>;

    /// Like `write`, with the executable bits set
    fn write_executable(&self, path: &Path, content: &str) -> FireResult<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;
}
