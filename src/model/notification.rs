use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::server::model::notification::Notification;

/// Notification row returned by the pull-style retrieval endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationDto {
    pub id: i32,
    pub event_id: Option<i32>,
    pub sender_id: Option<i32>,
    pub recipient_id: i32,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationDto {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            event_id: notification.event_id,
            sender_id: notification.sender_id,
            recipient_id: notification.recipient_id,
            content: notification.content,
            kind: notification.kind.as_str().to_string(),
            created_at: notification.created_at,
        }
    }
}

/// Identity of the user a live notification originates from.
#[derive(Debug, Clone, Serialize)]
pub struct SenderDto {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// Live notification payload pushed over a registered session.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationPushDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<SenderDto>,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}
