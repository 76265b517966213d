//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FireError, FireResult};

pub use crate::domain::value_objects::ConfigWarning;

use super::types::Config;

/// Deployment file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "fire.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FireResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FireError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for a run
///
/// An explicit path must exist; otherwise `fire.toml` in `project_root`,
/// then the user config, then defaults. Environment overrides are applied
/// on top of whichever is found.
pub fn load_or_default(
    explicit: Option<&Path>,
    project_root: &Path,
) -> FireResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [Some(project_root.join(PROJECT_CONFIG_FILE)), user_config_path()]
            .into_iter()
            .flatten()
            .find(|p| p.exists()),
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (FIRE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply FIRE_* overrides using `lookup` instead of the process environment
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(task) = lookup("FIRE_TASK") {
        config.task = task;
    }

    if let Some(dir) = lookup("FIRE_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(dir);
    }

    // FIRE_PARALLEL_PUSH
    if let Some(val) = lookup("FIRE_PARALLEL_PUSH") {
        config.parallel_push = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on");
    }

    if let Some(dir) = lookup("FIRE_DEPLOY_DIR") {
        config.deploy_dir = dir;
    }

    if let Some(supervisor) = lookup("FIRE_SUPERVISOR") {
        config.supervisor = supervisor;
    }

    config
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fire").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "task",
        "entry",
        "command",
        "output_dir",
        "parallel_push",
        "provider",
        "provider_file",
        "deploy_dir",
        "supervisor",
        "env",
        "hosts",
        "host",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
