//! Use Case Factory
//!
//! Wires use cases to their infrastructure dependencies.

use crate::application::DeployUseCase;
use crate::config::Config;
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::providers::ProviderRegistry;

/// Deploy use case writing to local disk, with the built-in providers
pub fn create_deploy_use_case(config: &Config) -> DeployUseCase<LocalFs> {
    let providers = ProviderRegistry::with_builtins(config.provider_file.as_deref());
    DeployUseCase::new(LocalFs::new(), providers)
}
