//! Deploy Use Case Tests

use super::*;
use crate::config::{Config, HostConfig};
use crate::domain::script::PushMode;
use crate::domain::value_objects::HostName;
use crate::error::FireError;
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::providers::{FnProvider, ProviderRegistry};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn project() -> (TempDir, Config) {
    let dir = tempdir().unwrap();
    let entry = dir.path().join("app.py");
    fs::write(&entry, "print('hi')\n").unwrap();

    let mut config = Config::default();
    config.task = "example_app".to_string();
    config.entry = Some(entry);
    config.output_dir = dir.path().join("tmp");
    config.env.insert("NAME".to_string(), "khanh".to_string());
    config.env.insert("AGE".to_string(), "20".to_string());

    let mut h1 = HostConfig::bare("khanh@100.69.15.9");
    h1.supervisor = Some("/opt/homebrew/bin/tmux".to_string());
    let mut h2 = HostConfig::bare("khanh@100.93.62.117");
    h2.env.insert("AGE".to_string(), "21".to_string());
    config.hosts = vec![h1, h2];

    (dir, config)
}

fn use_case() -> DeployUseCase<LocalFs> {
    DeployUseCase::new(LocalFs::new(), ProviderRegistry::with_builtins(None))
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn from_config_requires_entry() {
    let mut config = Config::default();
    config.hosts = vec![HostConfig::bare("u@h")];
    assert!(matches!(
        DeployOptions::from_config(&config),
        Err(FireError::MissingEntry)
    ));
}

#[test]
fn from_config_requires_hosts() {
    let mut config = Config::default();
    config.entry = Some("app.py".into());
    assert!(matches!(
        DeployOptions::from_config(&config),
        Err(FireError::NoHosts)
    ));
}

#[test]
fn from_config_rejects_bare_host() {
    let (_dir, mut config) = project();
    config.hosts.push(HostConfig::bare("100.1.1.1"));
    assert!(matches!(
        DeployOptions::from_config(&config),
        Err(FireError::InvalidHost { .. })
    ));
}

#[test]
fn from_config_rejects_bad_env_name() {
    let (_dir, mut config) = project();
    config.env.insert("BAD-NAME".to_string(), "x".to_string());
    assert!(matches!(
        DeployOptions::from_config(&config),
        Err(FireError::InvalidEnvName { .. })
    ));
}

#[test]
fn from_config_rejects_empty_deploy_dir() {
    let (_dir, mut config) = project();
    config.deploy_dir = String::new();
    assert!(matches!(
        DeployOptions::from_config(&config),
        Err(FireError::InvalidDeployDir { .. })
    ));
}

#[test]
fn from_config_rejects_empty_host_deploy_dir_override() {
    let (_dir, mut config) = project();
    config.hosts[1].deploy_dir = Some("/".to_string());
    assert!(matches!(
        DeployOptions::from_config(&config),
        Err(FireError::InvalidDeployDir { .. })
    ));
}

#[test]
fn from_config_rejects_task_name_with_space() {
    let (_dir, mut config) = project();
    config.task = "my app".to_string();
    assert!(matches!(
        DeployOptions::from_config(&config),
        Err(FireError::InvalidTaskName { .. })
    ));
}

#[test]
fn from_config_layers_host_overrides() {
    let (_dir, config) = project();
    let options = DeployOptions::from_config(&config).unwrap();

    assert_eq!(options.hosts[0].supervisor, "/opt/homebrew/bin/tmux");
    assert_eq!(options.hosts[1].supervisor, "tmux");
    assert_eq!(options.hosts[0].deploy_dir.as_str(), "/tmp");
    assert_eq!(options.hosts[0].env.render(), "NAME=khanh AGE=20");
    assert_eq!(options.hosts[1].env.render(), "NAME=khanh AGE=21");
    assert_eq!(options.push_mode, PushMode::Sequential);
}

#[test]
fn execute_writes_config_and_scripts() {
    let (dir, config) = project();
    let options = DeployOptions::from_config(&config).unwrap();

    let result = use_case().execute(&options).unwrap();

    let out = dir.path().join("tmp");
    assert_eq!(result.config_path, out.join("config.json"));
    assert_eq!(result.written.len(), 3);
    assert_eq!(result.host_count, 2);

    let records: serde_json::Value = serde_json::from_str(&read(&result.config_path)).unwrap();
    assert_eq!(
        records,
        json!([{"host": "khanh@100.69.15.9"}, {"host": "khanh@100.93.62.117"}])
    );

    let run = read(&result.run_path);
    assert!(run.starts_with("#!/usr/bin/env bash\nset -xe\n"));
    assert_eq!(run.matches("rsync -avh --delete --progress").count(), 4);
    assert!(run.contains("python app.py 0 config.json"));
    assert!(run.contains("python app.py 1 config.json"));
    assert!(run.contains("/opt/homebrew/bin/tmux new-session -s example_app -d"));
    assert!(run.contains("export NAME=khanh AGE=21;"));

    let clean = read(&result.clean_path);
    assert_eq!(clean.matches("rm -rf /tmp/example_app").count(), 2);
    assert!(!clean.contains("rsync"));
}

#[cfg(unix)]
#[test]
fn execute_marks_scripts_executable() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, config) = project();
    let options = DeployOptions::from_config(&config).unwrap();
    let result = use_case().execute(&options).unwrap();

    for path in [&result.run_path, &result.clean_path] {
        let mode = fs::metadata(path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755, "{}", path.display());
    }
    let mode = fs::metadata(&result.config_path).unwrap().permissions().mode();
    assert_eq!(mode & 0o111, 0);
}

#[test]
fn execute_missing_entry_writes_nothing() {
    let (dir, mut config) = project();
    config.entry = Some(dir.path().join("missing.py"));
    let options = DeployOptions::from_config(&config).unwrap();

    let err = use_case().execute(&options).unwrap_err();

    assert!(matches!(err, FireError::SourceNotFound { .. }));
    assert!(!dir.path().join("tmp").exists());
}

#[test]
fn execute_provider_count_mismatch_writes_nothing() {
    let (dir, mut config) = project();
    config.provider = "short".to_string();
    let options = DeployOptions::from_config(&config).unwrap();

    let mut providers = ProviderRegistry::with_builtins(None);
    providers.register(Box::new(FnProvider::new("short", |_: &[HostName]| Ok(vec![json!({})]))));
    let err = DeployUseCase::new(LocalFs::new(), providers)
        .execute(&options)
        .unwrap_err();

    assert!(matches!(err, FireError::ConfigCountMismatch { .. }));
    assert!(!dir.path().join("tmp").exists());
}

#[test]
fn execute_parallel_push_has_single_barrier() {
    let (_dir, mut config) = project();
    config.parallel_push = true;
    let options = DeployOptions::from_config(&config).unwrap();

    let result = use_case().execute(&options).unwrap();
    let run = read(&result.run_path);

    assert_eq!(run.matches("& FIRE_PUSH_PIDS+=($!)").count(), 4);
    assert_eq!(run.matches("wait \"$pid\"").count(), 1);
    let barrier = run.find("wait \"$pid\"").unwrap();
    assert!(run.find("new-session").unwrap() > barrier);
}

#[test]
fn execute_is_deterministic() {
    let (_dir, config) = project();
    let options = DeployOptions::from_config(&config).unwrap();

    let first = use_case().execute(&options).unwrap();
    let second = use_case().execute(&options).unwrap();

    assert_eq!(first.run_script, second.run_script);
    assert_eq!(first.clean_script, second.clean_script);
}
