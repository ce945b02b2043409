//! Error types for graph store operations
//!
//! Zero matching rows is never represented here: an unmatched pattern is a
//! valid, silent outcome for both dependent writes and reads.

use thiserror::Error;

/// Main error type for graph store operations
#[derive(Error, Debug)]
pub enum GraphError {
    /// Connection error - cannot reach or authenticate to the store
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Query execution error, surfaced unmodified from the store
    #[error("Query error: {0}")]
    QueryError(String),

    /// Configuration error - bad or missing environment settings
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Neo4rs driver error (wrapper)
    #[error("Neo4rs driver error: {0}")]
    DriverError(#[from] neo4rs::Error),

    /// Generic error with context
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for graph store operations
pub type Result<T> = std::result::Result<T, GraphError>;

impl From<String> for GraphError {
    fn from(s: String) -> Self {
        GraphError::Other(s)
    }
}

impl From<&str> for GraphError {
    fn from(s: &str) -> Self {
        GraphError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = GraphError::ConnectionError("Failed to connect".to_string());
        assert_eq!(error.to_string(), "Connection error: Failed to connect");

        let error = GraphError::QueryError("syntax error".to_string());
        assert_eq!(error.to_string(), "Query error: syntax error");

        let error = GraphError::ConfigError("STORE_URI is not set".to_string());
        assert!(error.to_string().contains("STORE_URI"));
    }

    #[test]
    fn test_error_conversion() {
        let error: GraphError = "test error".into();
        assert!(matches!(error, GraphError::Other(_)));

        let error: GraphError = "test error".to_string().into();
        assert!(matches!(error, GraphError::Other(_)));
    }
}
