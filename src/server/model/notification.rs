//! Domain models for notification records and emission parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// Kind of a notification record.
///
/// Stored as its canonical string form in the `notification.kind` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A join request awaiting the event owner's decision.
    Confirmation,
    /// A direct message about a decision taken on a join request.
    Message,
    /// An alert about an event-level change (cancellation).
    Alert,
    /// A scheduled reminder for an upcoming event.
    Reminder,
}

impl NotificationKind {
    /// Returns the canonical string form stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmation => "CONFIRMATION",
            Self::Message => "MESSAGE",
            Self::Alert => "ALERT",
            Self::Reminder => "REMINDER",
        }
    }

    /// Parses the canonical string form.
    ///
    /// # Arguments
    /// - `value` - Stored kind string
    ///
    /// # Returns
    /// - `Some(NotificationKind)` - Recognized kind
    /// - `None` - Unknown kind string
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "CONFIRMATION" => Some(Self::Confirmation),
            "MESSAGE" => Some(Self::Message),
            "ALERT" => Some(Self::Alert),
            "REMINDER" => Some(Self::Reminder),
            _ => None,
        }
    }
}

/// Durable notification record.
///
/// Append-only delivery record; rows stay retrievable for offline recipients
/// and are removed only by the pending-decision dedup rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub event_id: Option<i32>,
    pub sender_id: Option<i32>,
    pub recipient_id: i32,
    pub content: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Converts an entity model to a notification domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Notification)` - The converted domain model
    /// - `Err(DbErr)` - The stored kind string is not a recognized kind
    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, DbErr> {
        let kind = NotificationKind::parse(&entity.kind).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown notification kind '{}' for notification {}",
                entity.kind, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            event_id: entity.event_id,
            sender_id: entity.sender_id,
            recipient_id: entity.recipient_id,
            content: entity.content,
            kind,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for emitting a notification.
#[derive(Debug, Clone)]
pub struct EmitNotificationParams {
    /// User the notification is addressed to.
    pub recipient_id: i32,
    /// User the notification originates from, when there is one.
    pub sender_id: Option<i32>,
    /// Event the notification refers to, when there is one.
    pub event_id: Option<i32>,
    /// Human-readable notification text, without the sender name prefix.
    pub content: String,
    /// Kind of the notification.
    pub kind: NotificationKind,
}
