//! Host name value object - an SSH destination of the form `user@host`
//!
//! Only checks that an explicit user is present. This is a narrow
//! heuristic: it does not validate the host part as a hostname or address,
//! and it is not a security boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FireError, FireResult};

/// SSH destination with an explicit user component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HostName(String);

impl HostName {
    /// Parse `user@host`, rejecting bare hostnames
    pub fn parse(value: impl Into<String>) -> FireResult<Self> {
        let value = value.into();
        let valid = match value.split_once('@') {
            Some((user, host)) => {
                !user.is_empty()
                    && !host.is_empty()
                    && !host.contains('@')
                    && !value.chars().any(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            return Err(FireError::InvalidHost { host: value });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The user component (before `@`)
    pub fn user(&self) -> &str {
        self.0.split_once('@').map(|(u, _)| u).unwrap_or_default()
    }

    /// The host component (after `@`)
    pub fn host(&self) -> &str {
        self.0.split_once('@').map(|(_, h)| h).unwrap_or_default()
    }
}

impl fmt::Display for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for HostName {
    type Err = FireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HostName {
    type Error = FireError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<HostName> for String {
    fn from(host: HostName) -> Self {
        host.0
    }
}
