//! Participant factory for creating test event participant entities.
//!
//! This module provides factory methods for creating participant rows with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test participants with customizable fields.
///
/// Provides a builder pattern for creating participant entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::participant::ParticipantFactory;
///
/// let participant = ParticipantFactory::new(&db, event.id, user.id)
///     .accepted(true)
///     .attended(Some(true))
///     .build()
///     .await?;
/// ```
pub struct ParticipantFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    user_id: i32,
    accepted: bool,
    declined: bool,
    attended: Option<bool>,
}

impl<'a> ParticipantFactory<'a> {
    /// Creates a new ParticipantFactory with default values.
    ///
    /// Defaults:
    /// - accepted: `false` (invited state)
    /// - declined: `false`
    /// - attended: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `event_id` - Event the participant belongs to
    /// - `user_id` - User joining the event
    ///
    /// # Returns
    /// - `ParticipantFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, event_id: i32, user_id: i32) -> Self {
        Self {
            db,
            event_id,
            user_id,
            accepted: false,
            declined: false,
            attended: None,
        }
    }

    /// Sets the accepted flag.
    ///
    /// # Arguments
    /// - `accepted` - Whether the participant has been accepted
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn accepted(mut self, accepted: bool) -> Self {
        self.accepted = accepted;
        self
    }

    /// Sets the declined flag.
    ///
    /// # Arguments
    /// - `declined` - Whether the participant has been declined
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn declined(mut self, declined: bool) -> Self {
        self.declined = declined;
        self
    }

    /// Sets the attendance flag.
    ///
    /// # Arguments
    /// - `attended` - Attendance state (`None` when not yet tracked)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn attended(mut self, attended: Option<bool>) -> Self {
        self.attended = attended;
        self
    }

    /// Builds and inserts the participant entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event_participant::Model)` - Created participant entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event_participant::Model, DbErr> {
        entity::event_participant::ActiveModel {
            id: ActiveValue::NotSet,
            event_id: ActiveValue::Set(self.event_id),
            user_id: ActiveValue::Set(self.user_id),
            accepted: ActiveValue::Set(self.accepted),
            declined: ActiveValue::Set(self.declined),
            attended: ActiveValue::Set(self.attended),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an invited participant with default values.
///
/// Shorthand for `ParticipantFactory::new(db, event_id, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - Event the participant belongs to
/// - `user_id` - User joining the event
///
/// # Returns
/// - `Ok(entity::event_participant::Model)` - Created participant entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_participant(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::event_participant::Model, DbErr> {
    ParticipantFactory::new(db, event_id, user_id).build().await
}

/// Creates an accepted participant.
///
/// Shorthand for `ParticipantFactory::new(db, event_id, user_id).accepted(true).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - Event the participant belongs to
/// - `user_id` - User joining the event
///
/// # Returns
/// - `Ok(entity::event_participant::Model)` - Created participant entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_accepted_participant(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::event_participant::Model, DbErr> {
    ParticipantFactory::new(db, event_id, user_id)
        .accepted(true)
        .build()
        .await
}
