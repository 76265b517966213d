//! Error types for Fire
//!
//! Library code returns `FireResult`; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Fire operations
pub type FireResult<T> = Result<T, FireError>;

/// Main error type for Fire operations
#[derive(Error, Debug)]
pub enum FireError {
    /// Task (session) name was empty
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// Task name would not survive as a session name and path segment
    #[error("invalid task name '{name}': use only letters, digits, '_' and '-'")]
    InvalidTaskName { name: String },

    /// Deploy root is empty, the filesystem root, or not a plain path
    #[error("invalid deploy dir '{dir}': expected a non-root path of letters, digits and '_-./~+'")]
    InvalidDeployDir { dir: String },

    /// Host identifier is not of the form `user@host`
    #[error("invalid host '{host}': expected 'user@host'")]
    InvalidHost { host: String },

    /// A file to push does not exist locally
    #[error("source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Environment variable name is not a shell identifier
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvName { name: String },

    /// No config provider registered under this name
    #[error("unknown config provider '{name}' (available: {available})")]
    UnknownProvider { name: String, available: String },

    /// Provider returned a list whose length differs from the host count
    #[error("config provider '{provider}' produced {actual} records for {expected} hosts")]
    ConfigCountMismatch {
        provider: String,
        expected: usize,
        actual: usize,
    },

    /// Deployment file could not be parsed
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// No application entry file configured
    #[error("no entry file given (set `entry` in fire.toml or pass --entry)")]
    MissingEntry,

    /// Nothing to deploy to
    #[error("no hosts given (pass them on the command line or list [[hosts]] in fire.toml)")]
    NoHosts,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_host() {
        let err = FireError::InvalidHost {
            host: "example.com".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid host 'example.com': expected 'user@host'"
        );
    }

    #[test]
    fn test_error_display_count_mismatch() {
        let err = FireError::ConfigCountMismatch {
            provider: "static".to_string(),
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "config provider 'static' produced 2 records for 3 hosts"
        );
    }

    #[test]
    fn test_error_display_invalid_task_name() {
        let err = FireError::InvalidTaskName {
            name: "my app".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid task name 'my app': use only letters, digits, '_' and '-'"
        );
    }

    #[test]
    fn test_error_display_source_not_found() {
        let err = FireError::SourceNotFound {
            path: PathBuf::from("app/missing.py"),
        };
        assert_eq!(err.to_string(), "source file not found: app/missing.py");
    }
}
