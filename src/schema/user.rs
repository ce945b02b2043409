//! User node operations

use crate::error::{GraphError, Result};
use crate::schema::types::User;
use neo4rs::{query, Graph};

/// Create a new User node in the graph
///
/// Uses `CREATE`, not `MERGE`: calling this twice with the same name
/// creates two distinct nodes. Callers that need uniqueness must dedupe
/// externally.
///
/// # Arguments
/// * `graph` - graph store connection
/// * `name` - name property for the new node
///
/// # Example
/// ```no_run
/// use social_kg::{GraphClient, schema::create_user};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let client = GraphClient::new(
///         "bolt://localhost:7687",
///         "neo4j",
///         "password",
///         "neo4j"
///     ).await?;
///
///     create_user(client.graph(), "Alice").await?;
///     Ok(())
/// }
/// ```
pub async fn create_user(graph: &Graph, name: &str) -> Result<()> {
    let cypher = query("CREATE (u:User {name: $name})").param("name", name.to_string());

    graph
        .run(cypher)
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to create user: {}", e)))?;

    Ok(())
}

/// Get a User node by name
///
/// # Returns
/// * `Ok(Some(User))` if a user with that name exists
/// * `Ok(None)` if no user matches
/// * `Err(GraphError)` on failure
///
/// When duplicate nodes share the name, the first row the store returns
/// wins.
pub async fn get_user(graph: &Graph, name: &str) -> Result<Option<User>> {
    let cypher = query("MATCH (u:User {name: $name}) RETURN u").param("name", name.to_string());

    let mut result = graph
        .execute(cypher)
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to get user: {}", e)))?;

    if let Some(row) = result
        .next()
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to read user result: {}", e)))?
    {
        let node: neo4rs::Node = row
            .get("u")
            .map_err(|e| GraphError::QueryError(format!("Failed to extract user node: {}", e)))?;

        let name: String = node
            .get("name")
            .map_err(|e| GraphError::QueryError(format!("Failed to extract user name: {}", e)))?;

        Ok(Some(User::new(name)))
    } else {
        Ok(None)
    }
}
