//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an event together with its owner.
///
/// This is a convenience method that creates:
/// 1. User (as event owner) with a profile
/// 2. Event owned by that user
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, profile, event))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_owner(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::profile::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let (owner, profile) = crate::factory::user::create_user(db).await?;
    let event = crate::factory::event::create_event(db, owner.id).await?;

    Ok((owner, profile, event))
}

/// Creates an event with an owner plus an invited participant.
///
/// Builds the full dependency chain needed by most participation tests:
/// owner, joining user (both with profiles), the event, and an invited
/// (not yet accepted) participant row for the joining user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, joiner, event, participant))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_participant(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::event::Model,
        entity::event_participant::Model,
    ),
    DbErr,
> {
    let (owner, _) = crate::factory::user::create_user(db).await?;
    let (joiner, _) = crate::factory::user::create_user(db).await?;
    let event = crate::factory::event::create_event(db, owner.id).await?;
    let participant = crate::factory::participant::create_participant(db, event.id, joiner.id).await?;

    Ok((owner, joiner, event, participant))
}
