//! Process-wide configuration resolved once at cold start.

use std::env;

/// Environment variable naming the DynamoDB leads table.
pub const TABLE_NAME_ENV: &str = "LEADS_TABLE_NAME";

/// Table used when [`TABLE_NAME_ENV`] is unset or empty.
pub const DEFAULT_TABLE_NAME: &str = "leadsTable";

/// Read-only runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub table_name: String,
}

impl RuntimeConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup(TABLE_NAME_ENV)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

        Self { table_name }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
        }
    }
}
