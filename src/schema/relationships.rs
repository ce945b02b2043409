//! Relationship operations and traversal queries for the social graph
//!
//! Edge creation here follows the match-then-create shape: both endpoints
//! must already exist, and an unmatched endpoint means the pattern returns
//! zero rows, so no edge is created and no error is raised. The boolean
//! return value is the only signal that a write actually happened.

use crate::error::{GraphError, Result};
use neo4rs::{query, Graph};
use tracing::debug;

/// Create a LIKES relationship between a user and a hobby
///
/// Creates: (user:User)-[:LIKES]->(hobby:Hobby)
///
/// # Arguments
/// * `graph` - graph store connection
/// * `user_name` - name of an existing user
/// * `hobby_name` - name of an existing hobby
///
/// # Returns
/// * `Ok(true)` if both nodes exist and the edge was created
/// * `Ok(false)` if either node doesn't exist (no edge, no error)
/// * `Err(GraphError)` on failure
///
/// # Example
/// ```no_run
/// use social_kg::{GraphClient, schema::create_likes};
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
///     let created = create_likes(client.graph(), "Alice", "Running").await?;
///     println!("LIKES created: {}", created);
///     Ok(())
/// }
/// ```
pub async fn create_likes(graph: &Graph, user_name: &str, hobby_name: &str) -> Result<bool> {
    let cypher = query(
        "MATCH (u:User {name: $user_name})
         MATCH (h:Hobby {name: $hobby_name})
         CREATE (u)-[:LIKES]->(h)
         RETURN u, h",
    )
    .param("user_name", user_name.to_string())
    .param("hobby_name", hobby_name.to_string());

    let mut result = graph
        .execute(cypher)
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to create LIKES relationship: {}", e)))?;

    let created = result
        .next()
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to read LIKES result: {}", e)))?
        .is_some();

    if !created {
        debug!(
            "LIKES not created: no match for user '{}' or hobby '{}'",
            user_name, hobby_name
        );
    }

    Ok(created)
}

/// Create an ATTENDS relationship between a user and an event
///
/// Creates: (user:User)-[:ATTENDS]->(event:Event)
///
/// # Returns
/// * `Ok(true)` if both nodes exist and the edge was created
/// * `Ok(false)` if either node doesn't exist (no edge, no error)
/// * `Err(GraphError)` on failure
pub async fn create_attends(graph: &Graph, user_name: &str, event_name: &str) -> Result<bool> {
    let cypher = query(
        "MATCH (u:User {name: $user_name})
         MATCH (e:Event {name: $event_name})
         CREATE (u)-[:ATTENDS]->(e)
         RETURN u, e",
    )
    .param("user_name", user_name.to_string())
    .param("event_name", event_name.to_string());

    let mut result = graph.execute(cypher).await.map_err(|e| {
        GraphError::QueryError(format!("Failed to create ATTENDS relationship: {}", e))
    })?;

    let created = result
        .next()
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to read ATTENDS result: {}", e)))?
        .is_some();

    if !created {
        debug!(
            "ATTENDS not created: no match for user '{}' or event '{}'",
            user_name, event_name
        );
    }

    Ok(created)
}

/// Create a RELATED_TO relationship between an event and a hobby
///
/// Creates: (event:Event)-[:RELATED_TO]->(hobby:Hobby)
///
/// # Returns
/// * `Ok(true)` if both nodes exist and the edge was created
/// * `Ok(false)` if either node doesn't exist (no edge, no error)
/// * `Err(GraphError)` on failure
pub async fn create_related_to(graph: &Graph, event_name: &str, hobby_name: &str) -> Result<bool> {
    let cypher = query(
        "MATCH (e:Event {name: $event_name})
         MATCH (h:Hobby {name: $hobby_name})
         CREATE (e)-[:RELATED_TO]->(h)
         RETURN e, h",
    )
    .param("event_name", event_name.to_string())
    .param("hobby_name", hobby_name.to_string());

    let mut result = graph.execute(cypher).await.map_err(|e| {
        GraphError::QueryError(format!("Failed to create RELATED_TO relationship: {}", e))
    })?;

    let created = result
        .next()
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to read RELATED_TO result: {}", e)))?
        .is_some();

    if !created {
        debug!(
            "RELATED_TO not created: no match for event '{}' or hobby '{}'",
            event_name, hobby_name
        );
    }

    Ok(created)
}

/// Find all users that like a hobby
///
/// # Arguments
/// * `graph` - graph store connection
/// * `hobby_name` - name of the hobby to look up
///
/// # Returns
/// * `Ok(Vec<String>)` - names of matching users, in store-returned order
///   (treat as a set; the store guarantees no ordering)
/// * `Err(GraphError)` on failure
///
/// # Example
/// ```no_run
/// use social_kg::{GraphClient, schema::find_users_who_like_hobby};
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
///     let users = find_users_who_like_hobby(client.graph(), "Running").await?;
///     println!("Users who like Running: {:?}", users);
///     Ok(())
/// }
/// ```
pub async fn find_users_who_like_hobby(graph: &Graph, hobby_name: &str) -> Result<Vec<String>> {
    let cypher = query(
        "MATCH (u:User)-[:LIKES]->(h:Hobby {name: $hobby_name})
         RETURN u.name as user_name",
    )
    .param("hobby_name", hobby_name.to_string());

    collect_names(graph, cypher, "user_name").await
}

/// Find all users that attend an event
///
/// # Returns
/// * `Ok(Vec<String>)` - names of matching users, in store-returned order
/// * `Err(GraphError)` on failure
pub async fn find_users_who_attend_event(graph: &Graph, event_name: &str) -> Result<Vec<String>> {
    let cypher = query(
        "MATCH (u:User)-[:ATTENDS]->(e:Event {name: $event_name})
         RETURN u.name as user_name",
    )
    .param("event_name", event_name.to_string());

    collect_names(graph, cypher, "user_name").await
}

/// Find all hobbies a user likes
///
/// # Returns
/// * `Ok(Vec<String>)` - names of liked hobbies, in store-returned order
/// * `Err(GraphError)` on failure
pub async fn find_hobbies_for_user(graph: &Graph, user_name: &str) -> Result<Vec<String>> {
    let cypher = query(
        "MATCH (u:User {name: $user_name})-[:LIKES]->(h:Hobby)
         RETURN h.name as hobby_name",
    )
    .param("user_name", user_name.to_string());

    collect_names(graph, cypher, "hobby_name").await
}

/// Find events related to any hobby a user likes
///
/// Traverses (user)-[:LIKES]->(hobby)<-[:RELATED_TO]-(event). One entry is
/// returned per matched path, so an event related to two hobbies the user
/// likes appears twice. Callers wanting distinct events must dedupe.
///
/// # Returns
/// * `Ok(Vec<String>)` - event names, one per path, in store-returned order
/// * `Err(GraphError)` on failure
pub async fn find_events_for_user(graph: &Graph, user_name: &str) -> Result<Vec<String>> {
    let cypher = query(
        "MATCH (u:User {name: $user_name})-[:LIKES]->(h:Hobby)<-[:RELATED_TO]-(e:Event)
         RETURN e.name as event_name",
    )
    .param("user_name", user_name.to_string());

    collect_names(graph, cypher, "event_name").await
}

/// Run a query and collect one string column from every row
async fn collect_names(graph: &Graph, cypher: neo4rs::Query, column: &str) -> Result<Vec<String>> {
    let mut result = graph
        .execute(cypher)
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to execute query: {}", e)))?;

    let mut names = Vec::new();

    while let Some(row) = result
        .next()
        .await
        .map_err(|e| GraphError::QueryError(format!("Failed to read row: {}", e)))?
    {
        let name: String = row.get(column).map_err(|e| {
            GraphError::QueryError(format!("Failed to extract column '{}': {}", column, e))
        })?;

        names.push(name);
    }

    Ok(names)
}
