//! Integration tests for the social graph access layer
//!
//! These tests require a running Neo4j instance. Connection details come
//! from STORE_URI / STORE_USER / STORE_PASSWORD (and optional
//! STORE_DATABASE), with localhost defaults.
//!
//! Node names are suffixed with a per-test unique tag so runs against a
//! shared store do not collide; each test deletes what it created.

use neo4rs::query;
use social_kg::schema::{
    create_attends, create_event, create_hobby, create_likes, create_user, find_events_for_user,
    find_hobbies_for_user, find_users_who_attend_event, find_users_who_like_hobby, get_user,
};
use social_kg::GraphClient;
use std::collections::HashSet;

// Helper function to get connection details from environment or use defaults
fn get_store_config() -> (String, String, String, String) {
    let uri = std::env::var("STORE_URI").unwrap_or_else(|_| "bolt://localhost:7687".to_string());
    let user = std::env::var("STORE_USER").unwrap_or_else(|_| "neo4j".to_string());
    let password = std::env::var("STORE_PASSWORD").unwrap_or_else(|_| "password".to_string());
    let database = std::env::var("STORE_DATABASE").unwrap_or_else(|_| "neo4j".to_string());
    (uri, user, password, database)
}

async fn connect() -> GraphClient {
    let (uri, user, password, database) = get_store_config();

    GraphClient::new(&uri, &user, &password, &database)
        .await
        .expect("Failed to connect to graph store")
}

// Unique per-call tag appended to every node name a test creates
fn unique_tag() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch");
    format!("{}-{}{}", std::process::id(), now.as_secs(), now.subsec_nanos())
}

// Delete every node (and its edges) whose name carries the test's tag
async fn cleanup(client: &GraphClient, tag: &str) {
    let cypher = query("MATCH (n) WHERE n.name ENDS WITH $tag DETACH DELETE n")
        .param("tag", tag.to_string());
    client
        .graph()
        .run(cypher)
        .await
        .expect("Failed to clean up test nodes");
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored (requires live Neo4j)
async fn test_users_who_like_hobby_contains_each_liker_once() {
    let client = connect().await;
    let graph = client.graph();
    let tag = unique_tag();

    let alice = format!("Alice-{}", tag);
    let bob = format!("Bob-{}", tag);
    let charlie = format!("Charlie-{}", tag);
    let swimming = format!("Swimming-{}", tag);
    let running = format!("Running-{}", tag);
    let cycling = format!("Cycling-{}", tag);

    for name in [&alice, &bob, &charlie] {
        create_user(graph, name).await.expect("create_user failed");
    }
    for name in [&swimming, &running, &cycling] {
        create_hobby(graph, name).await.expect("create_hobby failed");
    }

    assert!(create_likes(graph, &alice, &running).await.unwrap());
    assert!(create_likes(graph, &bob, &running).await.unwrap());

    let likers = find_users_who_like_hobby(graph, &running)
        .await
        .expect("find_users_who_like_hobby failed");

    // Order is store-defined; compare as a set and check multiplicity.
    assert_eq!(likers.len(), 2, "each liker should appear exactly once");
    let likers_set: HashSet<&str> = likers.iter().map(String::as_str).collect();
    assert_eq!(
        likers_set,
        HashSet::from([alice.as_str(), bob.as_str()])
    );

    cleanup(&client, &tag).await;
}

#[tokio::test]
#[ignore]
async fn test_likes_with_missing_endpoint_is_silent_noop() {
    let client = connect().await;
    let graph = client.graph();
    let tag = unique_tag();

    let alice = format!("Alice-{}", tag);
    let chess = format!("Chess-{}", tag);

    create_user(graph, &alice).await.expect("create_user failed");

    // Hobby was never created: no edge, no error.
    let created = create_likes(graph, &alice, &chess)
        .await
        .expect("create_likes should not error on missing endpoint");
    assert!(!created, "no edge should be created for a missing hobby");

    let hobbies = find_hobbies_for_user(graph, &alice)
        .await
        .expect("find_hobbies_for_user failed");
    assert!(hobbies.is_empty(), "subsequent read must show no relationship");

    // Symmetric case: hobby exists, user does not.
    create_hobby(graph, &chess).await.expect("create_hobby failed");
    let missing_user = format!("Nobody-{}", tag);
    let created = create_likes(graph, &missing_user, &chess).await.unwrap();
    assert!(!created);

    let likers = find_users_who_like_hobby(graph, &chess).await.unwrap();
    assert!(likers.is_empty());

    cleanup(&client, &tag).await;
}

#[tokio::test]
#[ignore]
async fn test_events_for_user_returns_one_entry_per_path() {
    let client = connect().await;
    let graph = client.graph();
    let tag = unique_tag();

    let alice = format!("Alice-{}", tag);
    let swimming = format!("Swimming-{}", tag);
    let running = format!("Running-{}", tag);
    let cycling = format!("Cycling-{}", tag);
    let triathlon = format!("Triathlon-{}", tag);

    create_user(graph, &alice).await.unwrap();
    for hobby in [&swimming, &running, &cycling] {
        create_hobby(graph, hobby).await.unwrap();
        assert!(create_likes(graph, &alice, hobby).await.unwrap());
    }

    create_event(graph, &triathlon, &[&swimming, &running, &cycling])
        .await
        .expect("create_event failed");

    let events = find_events_for_user(graph, &alice)
        .await
        .expect("find_events_for_user failed");

    // Naive join: one entry per (liked-hobby, related-event) path.
    assert_eq!(
        events,
        vec![triathlon.clone(), triathlon.clone(), triathlon.clone()],
        "event should appear once per matched hobby path"
    );

    cleanup(&client, &tag).await;
}

#[tokio::test]
#[ignore]
async fn test_no_false_positive_before_likes_edge_exists() {
    let client = connect().await;
    let graph = client.graph();
    let tag = unique_tag();

    let dana = format!("Dana-{}", tag);
    let rowing = format!("Rowing-{}", tag);

    create_user(graph, &dana).await.unwrap();
    create_hobby(graph, &rowing).await.unwrap();

    let likers = find_users_who_like_hobby(graph, &rowing).await.unwrap();
    assert!(
        !likers.contains(&dana),
        "user must not appear before a LIKES edge is created"
    );

    assert!(create_likes(graph, &dana, &rowing).await.unwrap());

    let likers = find_users_who_like_hobby(graph, &rowing).await.unwrap();
    assert_eq!(likers, vec![dana.clone()]);

    cleanup(&client, &tag).await;
}

#[tokio::test]
#[ignore]
async fn test_attends_roundtrip() {
    let client = connect().await;
    let graph = client.graph();
    let tag = unique_tag();

    let erin = format!("Erin-{}", tag);
    let marathon = format!("Marathon-{}", tag);

    create_user(graph, &erin).await.unwrap();
    create_event(graph, &marathon, &[]).await.unwrap();

    assert!(create_attends(graph, &erin, &marathon).await.unwrap());

    let attendees = find_users_who_attend_event(graph, &marathon).await.unwrap();
    assert_eq!(attendees, vec![erin.clone()]);

    cleanup(&client, &tag).await;
}

#[tokio::test]
#[ignore]
async fn test_create_event_skips_unmatched_hobby_names() {
    let client = connect().await;
    let graph = client.graph();
    let tag = unique_tag();

    let frank = format!("Frank-{}", tag);
    let climbing = format!("Climbing-{}", tag);
    let ghost_hobby = format!("Ghost-{}", tag);
    let bouldering_cup = format!("BoulderingCup-{}", tag);

    create_user(graph, &frank).await.unwrap();
    create_hobby(graph, &climbing).await.unwrap();
    assert!(create_likes(graph, &frank, &climbing).await.unwrap());

    // One hobby exists, one does not; only one RELATED_TO edge results.
    create_event(graph, &bouldering_cup, &[&climbing, &ghost_hobby])
        .await
        .expect("create_event must not error on unmatched hobby names");

    let events = find_events_for_user(graph, &frank).await.unwrap();
    assert_eq!(events, vec![bouldering_cup.clone()]);

    cleanup(&client, &tag).await;
}

#[tokio::test]
#[ignore]
async fn test_get_user_lookup() {
    let client = connect().await;
    let graph = client.graph();
    let tag = unique_tag();

    let grace = format!("Grace-{}", tag);

    create_user(graph, &grace).await.unwrap();

    let found = get_user(graph, &grace).await.expect("get_user failed");
    assert_eq!(found.map(|u| u.name), Some(grace.clone()));

    let missing = get_user(graph, &format!("Missing-{}", tag)).await.unwrap();
    assert!(missing.is_none());

    cleanup(&client, &tag).await;
}

#[tokio::test]
#[ignore]
async fn test_repeated_create_user_yields_duplicate_nodes() {
    let client = connect().await;
    let graph = client.graph();
    let tag = unique_tag();

    let heidi = format!("Heidi-{}", tag);

    create_user(graph, &heidi).await.unwrap();
    create_user(graph, &heidi).await.unwrap();

    // CREATE without a uniqueness constraint: two distinct nodes.
    let cypher = query("MATCH (u:User {name: $name}) RETURN count(u) as node_count")
        .param("name", heidi.clone());
    let mut result = graph.execute(cypher).await.unwrap();
    let row = result.next().await.unwrap().expect("count query returned no row");
    let count: i64 = row.get("node_count").unwrap();
    assert_eq!(count, 2);

    cleanup(&client, &tag).await;
}

#[tokio::test]
#[ignore]
async fn test_ping() {
    let client = connect().await;

    let healthy = client.ping().await.expect("ping failed");
    assert!(healthy);
}
