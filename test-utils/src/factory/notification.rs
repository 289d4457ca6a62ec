//! Notification factory for creating test notification entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications with customizable fields.
///
/// Provides a builder pattern for creating notification rows with default
/// values that can be overridden as needed for specific test scenarios.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    recipient_id: i32,
    event_id: Option<i32>,
    sender_id: Option<i32>,
    content: String,
    kind: String,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    ///
    /// Defaults:
    /// - event_id: `None`
    /// - sender_id: `None`
    /// - content: `"Test notification"`
    /// - kind: `"CONFIRMATION"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `recipient_id` - User the notification is addressed to
    ///
    /// # Returns
    /// - `NotificationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, recipient_id: i32) -> Self {
        Self {
            db,
            recipient_id,
            event_id: None,
            sender_id: None,
            content: "Test notification".to_string(),
            kind: "CONFIRMATION".to_string(),
        }
    }

    /// Sets the related event.
    ///
    /// # Arguments
    /// - `event_id` - Optional event the notification refers to
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn event_id(mut self, event_id: Option<i32>) -> Self {
        self.event_id = event_id;
        self
    }

    /// Sets the sending user.
    ///
    /// # Arguments
    /// - `sender_id` - Optional user the notification originates from
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn sender_id(mut self, sender_id: Option<i32>) -> Self {
        self.sender_id = sender_id;
        self
    }

    /// Sets the notification content.
    ///
    /// # Arguments
    /// - `content` - Human-readable notification text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the notification kind.
    ///
    /// # Arguments
    /// - `kind` - One of `CONFIRMATION`, `MESSAGE`, `ALERT`, `REMINDER`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Builds and inserts the notification entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::notification::Model)` - Created notification entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            id: ActiveValue::NotSet,
            event_id: ActiveValue::Set(self.event_id),
            sender_id: ActiveValue::Set(self.sender_id),
            recipient_id: ActiveValue::Set(self.recipient_id),
            content: ActiveValue::Set(self.content),
            kind: ActiveValue::Set(self.kind),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a notification with default values for the specified recipient.
///
/// Shorthand for `NotificationFactory::new(db, recipient_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `recipient_id` - User the notification is addressed to
///
/// # Returns
/// - `Ok(entity::notification::Model)` - Created notification entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_notification(
    db: &DatabaseConnection,
    recipient_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, recipient_id).build().await
}
