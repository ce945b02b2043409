//! # Social Knowledge Graph (social-kg)
//!
//! A typed access layer over a Neo4j property graph modeling users, the
//! hobbies they like, and the events those hobbies relate to.
//!
//! ## Features
//!
//! - Typed creation of `User`, `Hobby` and `Event` nodes
//! - Typed `LIKES`, `ATTENDS` and `RELATED_TO` relationships
//! - Parameterized traversal queries materialized into plain values
//! - Async-first design using tokio, connection pooling via neo4rs
//! - Environment-driven configuration (`STORE_URI`, `STORE_USER`,
//!   `STORE_PASSWORD`, optional `STORE_DATABASE`)
//!
//! The layer is intentionally thin: the database engine, query planning,
//! pooling and transaction retry behavior belong to the driver. Every call
//! is a fresh round trip; no state is held between calls.
//!
//! ## Connecting
//!
//! ```no_run
//! use social_kg::GraphClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GraphClient::new(
//!         "bolt://localhost:7687",
//!         "neo4j",
//!         "password",
//!         "neo4j"
//!     ).await?;
//!
//!     let healthy = client.ping().await?;
//!     println!("Store healthy: {}", healthy);
//!     Ok(())
//! }
//! ```
//!
//! ## Building the graph
//!
//! ```no_run
//! use social_kg::{GraphClient, schema};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GraphClient::from_env().await?;
//!     let graph = client.graph();
//!
//!     schema::create_user(graph, "Alice").await?;
//!     schema::create_hobby(graph, "Running").await?;
//!     schema::create_likes(graph, "Alice", "Running").await?;
//!
//!     let runners = schema::find_users_who_like_hobby(graph, "Running").await?;
//!     println!("Users who like Running: {:?}", runners);
//!     Ok(())
//! }
//! ```
//!
//! ## Match semantics
//!
//! Relationship creation matches both endpoints by name and creates the
//! edge only when both exist. A missing endpoint is not an error: the
//! pattern matches zero rows, no edge is created, and the call returns
//! `Ok(false)`. Reads likewise return an empty `Vec` rather than erroring
//! when nothing matches. Node names are an informal key only; repeated
//! creates with the same name yield duplicate nodes.

pub mod config;
pub mod connection;
pub mod error;
pub mod schema;

// Re-export main types for convenience
pub use config::StoreConfig;
pub use connection::GraphClient;
pub use error::{GraphError, Result};
