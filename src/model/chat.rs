use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::server::model::chat::ChatMessage;

/// Inbound chat message frame.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[validate(range(min = 1, message = "Chat ID isn't valid"))]
    pub chat_id: i32,
    #[validate(range(min = 1, message = "User ID isn't valid"))]
    pub user_id: i32,
}

/// Stored chat message returned to API clients and broadcast to the room.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageDto {
    pub id: i32,
    pub chat_id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<ChatMessage> for ChatMessageDto {
    fn from(message: ChatMessage) -> Self {
        Self {
            id: message.id,
            chat_id: message.chat_room_id,
            user_id: message.user_id,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

/// Payload for creating a chat room.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatRoomDto {
    #[serde(default)]
    pub is_group: bool,
}

/// Response returned when a chat room is created.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatRoomResponseDto {
    pub chat_room_id: i32,
}

/// Chat room summary with its message history (newest first).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoomDto {
    pub id: i32,
    pub is_group: bool,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<ChatMessageDto>,
}

/// Acknowledgment sent back to the author of a chat frame.
#[derive(Debug, Clone, Serialize)]
pub struct MessageReplyDto {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl MessageReplyDto {
    /// Builds a success acknowledgment echoing the validated message.
    pub fn success(data: MessageDto) -> Self {
        Self {
            status: "success",
            data: Some(data),
            error: None,
            details: None,
            timestamp: Some(Utc::now()),
        }
    }

    /// Builds an error acknowledgment with optional per-field details.
    pub fn error(message: impl Into<String>, details: Option<serde_json::Value>) -> Self {
        Self {
            status: "error",
            data: None,
            error: Some(message.into()),
            details,
            timestamp: None,
        }
    }
}
