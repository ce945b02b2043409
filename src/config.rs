//! Environment-driven store configuration
//!
//! Connection parameters come from `STORE_URI`, `STORE_USER` and
//! `STORE_PASSWORD`; `STORE_DATABASE` is optional and defaults to "neo4j".
//! Call `dotenv::dotenv()` in the entry point before `from_env` if a `.env`
//! file should be honored.

use crate::error::{GraphError, Result};
use serde::Deserialize;

/// Default database name when `STORE_DATABASE` is unset
pub const DEFAULT_DATABASE: &str = "neo4j";

/// Connection settings for the backing graph store
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Bolt URI, e.g. "bolt://localhost:7687"
    pub uri: String,
    /// Username for authentication
    pub user: String,
    /// Password for authentication
    pub password: String,
    /// Database name
    pub database: String,
}

impl StoreConfig {
    /// Build a config from explicit values
    pub fn new(uri: String, user: String, password: String, database: String) -> Self {
        Self {
            uri,
            user,
            password,
            database,
        }
    }

    /// Read the config from environment variables
    ///
    /// # Errors
    /// Returns `GraphError::ConfigError` if any required variable is unset.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            uri: require_var("STORE_URI")?,
            user: require_var("STORE_USER")?,
            password: require_var("STORE_PASSWORD")?,
            database: std::env::var("STORE_DATABASE")
                .unwrap_or_else(|_| DEFAULT_DATABASE.to_string()),
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| GraphError::ConfigError(format!("{} is not set", name)))
}
