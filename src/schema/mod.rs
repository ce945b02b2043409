//! Social graph schema module
//!
//! This module defines the schema for the social graph: User, Hobby and
//! Event nodes plus the LIKES, ATTENDS and RELATED_TO relationships that
//! connect them, with the traversal queries over those relationships.

pub mod event;
pub mod hobby;
pub mod relationships;
pub mod types;
pub mod user;

pub use event::{create_event, get_event};
pub use hobby::{create_hobby, get_hobby};
pub use relationships::{
    create_attends,
    create_likes,
    create_related_to,
    find_events_for_user,
    find_hobbies_for_user,
    find_users_who_attend_event,
    find_users_who_like_hobby,
};
pub use types::{Event, Hobby, User};
pub use user::{create_user, get_user};
