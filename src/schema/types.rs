//! Type definitions for social graph nodes
//!
//! Every node carries a single `name` property. The name is treated as an
//! informal key by caller discipline; no uniqueness constraint exists at
//! the store level, so repeated creates with the same name yield distinct
//! nodes.

use serde::{Deserialize, Serialize};

/// User node in the social graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, used as the match key in all queries
    pub name: String,
}

impl User {
    /// Create a new user with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Hobby node in the social graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hobby {
    /// Display name, used as the match key in all queries
    pub name: String,
}

impl Hobby {
    /// Create a new hobby with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Event node in the social graph
///
/// Events are linked to the hobbies they relate to via RELATED_TO edges;
/// the edges live in the store, not on this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Display name, used as the match key in all queries
    pub name: String,
}

impl Event {
    /// Create a new event with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
