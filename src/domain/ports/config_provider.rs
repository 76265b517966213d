//! ConfigProvider port - produces one configuration record per host
//!
//! The records are serialized as a JSON array and pushed to every host;
//! the application picks its own record by index.

use serde_json::Value;

use crate::domain::value_objects::HostName;
use crate::error::FireResult;

/// Produces a per-host configuration record given the full host list
pub trait ConfigProvider {
    /// Name the provider is registered under
    fn name(&self) -> &str;

    /// One record per host, in host order
    fn make(&self, hosts: &[HostName]) -> FireResult<Vec<Value>>;
}
