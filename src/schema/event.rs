//! Event node operations

use crate::error::{GraphError, Result};
use crate::schema::relationships::create_related_to;
use crate::schema::types::Event;
use neo4rs::{query, Graph};

/// Create a new Event node and link it to existing hobbies
///
/// The event node is created first, then one RELATED_TO edge is created
/// per entry in `hobby_names` that matches an existing Hobby. Names with
/// no matching hobby produce no edge and no error. Each statement is its
/// own round trip; there is no transaction spanning the whole call, so a
/// failure partway leaves earlier edges in place.
///
/// # Arguments
/// * `graph` - graph store connection
/// * `name` - name property for the new event
/// * `hobby_names` - names of hobbies this event relates to
///
/// # Example
/// ```no_run
/// use social_kg::{GraphClient, schema::create_event};
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
///     create_event(client.graph(), "Triathlon", &["Swimming", "Running", "Cycling"]).await?;
///     Ok(())
/// }
/// ```
pub async fn create_event(graph: &Graph, name: &str, hobby_names: &[&str]) -> Result<()> {
    let cypher = query("CREATE (e:Event {name: $name})").param("name", name.to_string());

    graph
        .run(cypher)
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to create event: {}", e)))?;

    for hobby_name in hobby_names {
        create_related_to(graph, name, hobby_name).await?;
    }

    Ok(())
}

/// Get an Event node by name
///
/// # Returns
/// * `Ok(Some(Event))` if an event with that name exists
/// * `Ok(None)` if no event matches
/// * `Err(GraphError)` on failure
pub async fn get_event(graph: &Graph, name: &str) -> Result<Option<Event>> {
    let cypher = query("MATCH (e:Event {name: $name}) RETURN e").param("name", name.to_string());

    let mut result = graph
        .execute(cypher)
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to get event: {}", e)))?;

    if let Some(row) = result
        .next()
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to read event result: {}", e)))?
    {
        let node: neo4rs::Node = row
            .get("e")
            .map_err(|e| GraphError::QueryError(format!("Failed to extract event node: {}", e)))?;

        let name: String = node
            .get("name")
            .map_err(|e| GraphError::QueryError(format!("Failed to extract event name: {}", e)))?;

        Ok(Some(Event::new(name)))
    } else {
        Ok(None)
    }
}
