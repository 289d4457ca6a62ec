//! Domain models for chat rooms and messages.

use chrono::{DateTime, Utc};

/// Chat room container for messages.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRoom {
    pub id: i32,
    pub is_group: bool,
    pub created_at: DateTime<Utc>,
}

impl ChatRoom {
    /// Converts an entity model to a chat room domain model at the repository boundary.
    pub fn from_entity(entity: entity::chat_room::Model) -> Self {
        Self {
            id: entity.id,
            is_group: entity.is_group,
            created_at: entity.created_at,
        }
    }
}

/// Persisted chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: i32,
    pub chat_room_id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Converts an entity model to a chat message domain model at the repository boundary.
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            chat_room_id: entity.chat_room_id,
            user_id: entity.user_id,
            content: entity.content,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for storing a chat message.
#[derive(Debug, Clone)]
pub struct StoreMessageParams {
    /// Room the message belongs to.
    pub chat_room_id: i32,
    /// Author of the message.
    pub user_id: i32,
    /// Message text.
    pub content: String,
}
