//! Config providers and the registry they are resolved from
//!
//! Built-ins:
//! - `hosts`: `{"host": "<user@host>"}` for each host
//! - `static`: a JSON array read from a file, one element per host

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use crate::domain::ports::ConfigProvider;
use crate::domain::value_objects::HostName;
use crate::error::{FireError, FireResult};

/// Name of the default provider
pub const DEFAULT_PROVIDER: &str = "hosts";

/// One `{"host": ...}` record per host
#[derive(Debug, Clone, Copy, Default)]
pub struct HostRecordProvider;

impl ConfigProvider for HostRecordProvider {
    fn name(&self) -> &str {
        DEFAULT_PROVIDER
    }

    fn make(&self, hosts: &[HostName]) -> FireResult<Vec<Value>> {
        Ok(hosts.iter().map(|h| json!({ "host": h.as_str() })).collect())
    }
}

/// Records read verbatim from a JSON array file
#[derive(Debug, Clone)]
pub struct StaticFileProvider {
    path: PathBuf,
}

impl StaticFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigProvider for StaticFileProvider {
    fn name(&self) -> &str {
        "static"
    }

    fn make(&self, _hosts: &[HostName]) -> FireResult<Vec<Value>> {
        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Value>(&content)? {
            Value::Array(records) => Ok(records),
            other => Err(FireError::ConfigParse {
                file: self.path.clone(),
                message: format!("expected a JSON array, found {}", json_kind(&other)),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Provider backed by a closure, for embedding callers
pub struct FnProvider<F> {
    name: String,
    make: F,
}

impl<F> FnProvider<F>
where
    F: Fn(&[HostName]) -> FireResult<Vec<Value>>,
{
    pub fn new(name: impl Into<String>, make: F) -> Self {
        Self {
            name: name.into(),
            make,
        }
    }
}

impl<F> ConfigProvider for FnProvider<F>
where
    F: Fn(&[HostName]) -> FireResult<Vec<Value>>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn make(&self, hosts: &[HostName]) -> FireResult<Vec<Value>> {
        (self.make)(hosts)
    }
}

/// Named providers, resolved explicitly by the deployment driver
#[derive(Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, Box<dyn ConfigProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `hosts`, plus `static` when a file is given
    pub fn with_builtins(static_file: Option<&Path>) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(HostRecordProvider));
        if let Some(path) = static_file {
            registry.register(Box::new(StaticFileProvider::new(path)));
        }
        registry
    }

    /// Add a provider; a later registration under the same name wins
    pub fn register(&mut self, provider: Box<dyn ConfigProvider>) {
        self.providers.insert(provider.name().to_string(), provider);
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }

    pub fn get(&self, name: &str) -> FireResult<&dyn ConfigProvider> {
        self.providers
            .get(name)
            .map(|p| p.as_ref())
            .ok_or_else(|| FireError::UnknownProvider {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Run a provider and check it produced exactly one record per host
    pub fn make(&self, name: &str, hosts: &[HostName]) -> FireResult<Vec<Value>> {
        let provider = self.get(name)?;
        let records = provider.make(hosts)?;
        if records.len() != hosts.len() {
            return Err(FireError::ConfigCountMismatch {
                provider: name.to_string(),
                expected: hosts.len(),
                actual: records.len(),
            });
        }
        Ok(records)
    }
}
