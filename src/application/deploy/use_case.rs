//! Deploy Use Case
//!
//! Orchestrates script generation:
//! 1. Check the entry artifact exists
//! 2. Ask the config provider for one record per host
//! 3. Write `config.json`
//! 4. Build every host's run and clean task
//! 5. Assemble and write the `run` and `clean` scripts
//!
//! Validation failures in steps 1-2 abort before anything is written.

use std::path::Path;

use crate::domain::entities::{GeneratedFile, Task};
use crate::domain::ports::FileSystem;
use crate::domain::script::{GeneratedScript, ScriptAssembler};
use crate::error::{FireError, FireResult};
use crate::infrastructure::providers::ProviderRegistry;

use super::options::DeployOptions;
use super::result::DeployResult;

/// Deploy use case - the deployment driver
pub struct DeployUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    providers: ProviderRegistry,
}

impl<FS> DeployUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS, providers: ProviderRegistry) -> Self {
        Self {
            file_system,
            providers,
        }
    }

    /// Generate and write config.json, run and clean
    pub fn execute(&self, options: &DeployOptions) -> FireResult<DeployResult> {
        if !self.file_system.exists(&options.entry) {
            return Err(FireError::SourceNotFound {
                path: options.entry.clone(),
            });
        }

        let hosts = options.host_names();
        let records = self.providers.make(&options.provider, &hosts)?;
        tracing::debug!(
            provider = %options.provider,
            hosts = hosts.len(),
            "config records produced"
        );

        let config_path = options.config_path();
        let mut payload = serde_json::to_string_pretty(&records)?;
        payload.push('\n');
        self.write_file(&GeneratedFile::new(&config_path, payload))?;

        // pushing config.json needs it on disk before the tasks are built
        let (run_script, clean_script) = self.build_scripts(options, &config_path)?;

        let run_path = options.run_path();
        let clean_path = options.clean_path();
        for file in [
            GeneratedFile::script(&clean_path, clean_script.render()),
            GeneratedFile::script(&run_path, run_script.render()),
        ] {
            self.write_file(&file)?;
        }

        tracing::info!(
            task = %options.task,
            hosts = hosts.len(),
            mode = ?options.push_mode,
            "generated deployment scripts"
        );

        Ok(DeployResult {
            written: vec![config_path.clone(), clean_path.clone(), run_path.clone()],
            config_path,
            run_path,
            clean_path,
            run_script,
            clean_script,
            host_count: hosts.len(),
        })
    }

    fn write_file(&self, file: &GeneratedFile) -> FireResult<()> {
        if file.is_executable() {
            self.file_system.write_executable(file.path(), file.content())
        } else {
            self.file_system.write(file.path(), file.content())
        }
    }

    /// Build both scripts; `config_path` must already exist locally
    pub fn build_scripts(
        &self,
        options: &DeployOptions,
        config_path: &Path,
    ) -> FireResult<(GeneratedScript, GeneratedScript)> {
        let mut run_tasks: Vec<Task> = Vec::with_capacity(options.hosts.len());
        let mut clean_tasks: Vec<Task> = Vec::with_capacity(options.hosts.len());

        for (index, host) in options.hosts.iter().enumerate() {
            let target = host.target(&options.task, &options.entry, config_path);
            run_tasks.push(target.run_task(index)?);
            clean_tasks.push(target.clean_task());
        }

        let assembler = ScriptAssembler::new(options.push_mode);
        Ok((
            assembler.run_script(&run_tasks),
            assembler.clean_script(&clean_tasks),
        ))
    }
}
