//! Neo4j connection management
//!
//! This module provides the main client for interacting with the graph
//! store. The client is constructed once at process start and passed into
//! every access-layer call; there is no ambient singleton.

use crate::config::StoreConfig;
use crate::error::{GraphError, Result};
use neo4rs::{query, ConfigBuilder, Graph};
use tracing::{debug, info};

/// Main graph store client with connection pooling
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new client and verify the store is reachable
    ///
    /// The underlying pool is lazy, so a `RETURN 1` ping runs immediately
    /// after connecting; an unreachable or misauthenticated store fails
    /// here, at startup, rather than on the first real query.
    ///
    /// # Arguments
    /// * `uri` - Bolt connection URI (e.g., "bolt://localhost:7687")
    /// * `user` - Username for authentication
    /// * `password` - Password for authentication
    /// * `database` - Database name (default setups use "neo4j")
    ///
    /// # Example
    /// ```no_run
    /// use social_kg::GraphClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let client = GraphClient::new(
    ///         "bolt://localhost:7687",
    ///         "neo4j",
    ///         "password",
    ///         "neo4j"
    ///     ).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn new(uri: &str, user: &str, password: &str, database: &str) -> Result<Self> {
        info!("Connecting to graph store at {} (database: {})", uri, database);

        let config = ConfigBuilder::default()
            .uri(uri)
            .user(user)
            .password(password)
            .db(database)
            .fetch_size(500)
            .max_connections(16)
            .build()
            .map_err(|e| GraphError::ConfigError(e.to_string()))?;

        let graph = Graph::connect(config)
            .await
            .map_err(|e| GraphError::ConnectionError(e.to_string()))?;

        let client = Self { graph };
        client.ping().await?;

        info!("Successfully connected to graph store");

        Ok(client)
    }

    /// Create a client from `STORE_URI` / `STORE_USER` / `STORE_PASSWORD`
    /// (and optional `STORE_DATABASE`) environment variables
    pub async fn from_env() -> Result<Self> {
        let config = StoreConfig::from_env()?;
        Self::with_config(&config).await
    }

    /// Create a client from an explicit [`StoreConfig`]
    pub async fn with_config(config: &StoreConfig) -> Result<Self> {
        Self::new(&config.uri, &config.user, &config.password, &config.database).await
    }

    /// Simple health check using `RETURN 1`
    ///
    /// # Returns
    /// * `Ok(true)` if the store responds
    /// * `Err(GraphError)` if the round trip fails
    pub async fn ping(&self) -> Result<bool> {
        debug!("Executing health check (RETURN 1)");

        self.graph
            .run(query("RETURN 1"))
            .await
            .map_err(|e| GraphError::ConnectionError(e.to_string()))?;

        debug!("Health check passed");
        Ok(true)
    }

    /// Get a reference to the underlying neo4rs Graph instance
    ///
    /// This allows direct access for custom Cypher beyond the typed
    /// operations in [`crate::schema`].
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}
