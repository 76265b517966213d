//! Deploy directory value object - the remote root task directories live under

use std::fmt;

use crate::error::{FireError, FireResult};

/// Deploy root used when none is given
pub const DEFAULT_DEPLOY_DIR: &str = "/tmp";

/// Remote deploy root, stored without trailing slashes
///
/// The task directory `<deploy_dir>/<task>` is removed with `rm -rf` by the
/// clean script, so an empty root (which would put it directly under `/`)
/// is rejected, as is anything outside a plain path charset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeployDir(String);

impl DeployDir {
    pub fn new(dir: impl Into<String>) -> FireResult<Self> {
        let dir = dir.into();
        let trimmed = dir.trim_end_matches('/');
        let valid = !trimmed.is_empty() && trimmed.chars().all(is_path_char);
        if !valid {
            return Err(FireError::InvalidDeployDir { dir });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DeployDir {
    fn default() -> Self {
        Self(DEFAULT_DEPLOY_DIR.to_string())
    }
}

impl fmt::Display for DeployDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | '~' | '+')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deploy_dir_drops_trailing_slashes() {
        assert_eq!(DeployDir::new("/srv/deploy/").unwrap().as_str(), "/srv/deploy");
        assert_eq!(DeployDir::new("~/apps//").unwrap().as_str(), "~/apps");
    }

    #[test]
    fn deploy_dir_default_is_tmp() {
        assert_eq!(DeployDir::default().as_str(), "/tmp");
    }

    #[test]
    fn deploy_dir_rejects_empty_and_root() {
        for dir in ["", "/", "///"] {
            assert!(
                matches!(DeployDir::new(dir), Err(FireError::InvalidDeployDir { .. })),
                "'{}' accepted",
                dir
            );
        }
    }

    #[test]
    fn deploy_dir_rejects_shell_words() {
        assert!(DeployDir::new("/tmp/my dir").is_err());
        assert!(DeployDir::new("/tmp;rm").is_err());
        assert!(DeployDir::new("$HOME").is_err());
    }
}
