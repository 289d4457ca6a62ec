//! Event factory for creating test event entities.
//!
//! This module provides factory methods for creating event entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// Provides a builder pattern for creating event entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db, owner.id)
///     .name("Garden Party")
///     .target_date(Utc::now() + chrono::Duration::days(2))
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    description: Option<String>,
    location: Option<String>,
    target_date: DateTime<Utc>,
    event_start: DateTime<Utc>,
    event_end: DateTime<Utc>,
    is_canceled: bool,
    is_done: bool,
    member_count: i32,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Event {id}"` where id is auto-incremented
    /// - description: `Some("Test event description")`
    /// - location: `Some("Test venue")`
    /// - target_date: 5 days from now
    /// - event_start: 5 days from now
    /// - event_end: 5 days and 2 hours from now
    /// - is_canceled: `false`
    /// - is_done: `false`
    /// - member_count: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - User ID of the event owner
    ///
    /// # Returns
    /// - `EventFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        let start = Utc::now() + chrono::Duration::days(5);
        Self {
            db,
            owner_id,
            name: format!("Event {}", id),
            description: Some("Test event description".to_string()),
            location: Some("Test venue".to_string()),
            target_date: start,
            event_start: start,
            event_end: start + chrono::Duration::hours(2),
            is_canceled: false,
            is_done: false,
            member_count: 0,
        }
    }

    /// Sets the event name.
    ///
    /// # Arguments
    /// - `name` - Display name for the event
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the target date used by the reminder sweep.
    ///
    /// # Arguments
    /// - `target_date` - Date the event is scheduled for
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn target_date(mut self, target_date: DateTime<Utc>) -> Self {
        self.target_date = target_date;
        self
    }

    /// Sets the event start time.
    ///
    /// # Arguments
    /// - `event_start` - Start of the event
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn event_start(mut self, event_start: DateTime<Utc>) -> Self {
        self.event_start = event_start;
        self
    }

    /// Sets the event end time.
    ///
    /// # Arguments
    /// - `event_end` - End of the event
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn event_end(mut self, event_end: DateTime<Utc>) -> Self {
        self.event_end = event_end;
        self
    }

    /// Sets whether the event is canceled.
    ///
    /// # Arguments
    /// - `is_canceled` - Cancellation flag
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn is_canceled(mut self, is_canceled: bool) -> Self {
        self.is_canceled = is_canceled;
        self
    }

    /// Sets the starting member count.
    ///
    /// # Arguments
    /// - `member_count` - Initial accepted-member count
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn member_count(mut self, member_count: i32) -> Self {
        self.member_count = member_count;
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            location: ActiveValue::Set(self.location),
            target_date: ActiveValue::Set(self.target_date),
            event_start: ActiveValue::Set(self.event_start),
            event_end: ActiveValue::Set(self.event_end),
            is_canceled: ActiveValue::Set(self.is_canceled),
            is_done: ActiveValue::Set(self.is_done),
            member_count: ActiveValue::Set(self.member_count),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values for the specified owner.
///
/// Shorthand for `EventFactory::new(db, owner_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - User ID of the event owner
///
/// # Returns
/// - `Ok(entity::event::Model)` - Created event entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let event = create_event(&db, owner.id).await?;
/// ```
pub async fn create_event(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, owner_id).build().await
}
