//! Demonstrates the social graph schema usage
//!
//! This example shows how to:
//! - Create users, hobbies, and events
//! - Link them together with LIKES, ATTENDS and RELATED_TO relationships
//! - Query the graph
//!
//! Connection details come from STORE_URI / STORE_USER / STORE_PASSWORD
//! (and optional STORE_DATABASE), loaded from the environment or a .env
//! file. Run with: cargo run --example social_demo

use social_kg::schema::{
    create_attends, create_event, create_hobby, create_likes, create_user, find_events_for_user,
    find_users_who_attend_event, find_users_who_like_hobby,
};
use social_kg::GraphClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Honor a .env file if present, then connect
    dotenv::dotenv().ok();
    let client = GraphClient::from_env().await?;

    println!("✓ Connected to graph store\n");

    // 1. Create users
    println!("1. Creating users...");
    for name in ["Alice", "Bob", "Charlie"] {
        create_user(client.graph(), name).await?;
        println!("   Created user: {}", name);
    }

    // 2. Create hobbies
    println!("\n2. Creating hobbies...");
    for name in ["Swimming", "Running", "Cycling"] {
        create_hobby(client.graph(), name).await?;
        println!("   Created hobby: {}", name);
    }

    // 3. Create likes
    println!("\n3. Creating LIKES relationships...");
    for (user, hobby) in [
        ("Alice", "Swimming"),
        ("Alice", "Running"),
        ("Bob", "Running"),
        ("Charlie", "Cycling"),
    ] {
        let created = create_likes(client.graph(), user, hobby).await?;
        if created {
            println!("   {} -LIKES-> {}", user, hobby);
        } else {
            println!("   ⚠ Could not link {} to {} (missing node)", user, hobby);
        }
    }

    // 4. Create an event related to hobbies, and an attendee
    println!("\n4. Creating event...");
    create_event(client.graph(), "Triathlon", &["Swimming", "Running", "Cycling"]).await?;
    println!("   Created event: Triathlon (related to Swimming, Running, Cycling)");

    let attends = create_attends(client.graph(), "Alice", "Triathlon").await?;
    if attends {
        println!("   Alice -ATTENDS-> Triathlon");
    }

    // 5. Query the graph
    println!("\n5. Querying...");
    let runners = find_users_who_like_hobby(client.graph(), "Running").await?;
    println!("   Users who like Running: {:?}", runners);

    let attendees = find_users_who_attend_event(client.graph(), "Triathlon").await?;
    println!("   Users attending Triathlon: {:?}", attendees);

    // One entry per (liked-hobby, related-event) path, duplicates preserved
    let events = find_events_for_user(client.graph(), "Alice").await?;
    println!("   Events for Alice (per path): {:?}", events);

    println!("\n{}", "=".repeat(50));
    println!("Social Demo Complete!");
    println!("{}", "=".repeat(50));
    println!("\nYou can visualize this in Neo4j Browser with:");
    println!("  MATCH (n) RETURN n LIMIT 50");

    Ok(())
}
