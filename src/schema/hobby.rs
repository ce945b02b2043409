//! Hobby node operations

use crate::error::{GraphError, Result};
use crate::schema::types::Hobby;
use neo4rs::{query, Graph};

/// Create a new Hobby node in the graph
///
/// Same duplication caveat as [`crate::schema::create_user`]: no
/// uniqueness check is performed.
pub async fn create_hobby(graph: &Graph, name: &str) -> Result<()> {
    let cypher = query("CREATE (h:Hobby {name: $name})").param("name", name.to_string());

    graph
        .run(cypher)
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to create hobby: {}", e)))?;

    Ok(())
}

/// Get a Hobby node by name
///
/// # Returns
/// * `Ok(Some(Hobby))` if a hobby with that name exists
/// * `Ok(None)` if no hobby matches
/// * `Err(GraphError)` on failure
pub async fn get_hobby(graph: &Graph, name: &str) -> Result<Option<Hobby>> {
    let cypher = query("MATCH (h:Hobby {name: $name}) RETURN h").param("name", name.to_string());

    let mut result = graph
        .execute(cypher)
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to get hobby: {}", e)))?;

    if let Some(row) = result
        .next()
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to read hobby result: {}", e)))?
    {
        let node: neo4rs::Node = row
            .get("h")
            .map_err(|e| GraphError::QueryError(format!("Failed to extract hobby node: {}", e)))?;

        let name: String = node
            .get("name")
            .map_err(|e| GraphError::QueryError(format!("Failed to extract hobby name: {}", e)))?;

        Ok(Some(Hobby::new(name)))
    } else {
        Ok(None)
    }
}
