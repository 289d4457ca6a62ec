//! Domain models for event data operations.
//!
//! Defines event-related domain models and parameter types for event operations.

use chrono::{DateTime, Utc};

/// Scheduled event with ownership, lifecycle flags, and membership count.
///
/// Tracks the event owner, the dates relevant to the reminder sweep, and the
/// increment-only count of accepted members.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Unique identifier for the event.
    pub id: i32,
    /// User ID of the event owner (creator).
    pub owner_id: i32,
    /// Name of the event.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional venue or location text.
    pub location: Option<String>,
    /// Date the event is scheduled for; drives the reminder sweep window.
    pub target_date: DateTime<Utc>,
    /// Start of the event.
    pub event_start: DateTime<Utc>,
    /// End of the event.
    pub event_end: DateTime<Utc>,
    /// Whether the owner has canceled the event.
    pub is_canceled: bool,
    /// Whether the scheduler has marked the event as past.
    pub is_done: bool,
    /// Count of accepted members. Advanced exactly once per acceptance and
    /// never decremented.
    pub member_count: i32,
    /// Timestamp when the event was created.
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Converts an entity model to an event domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Event` - The converted event domain model
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            description: entity.description,
            location: entity.location,
            target_date: entity.target_date,
            event_start: entity.event_start,
            event_end: entity.event_end,
            is_canceled: entity.is_canceled,
            is_done: entity.is_done,
            member_count: entity.member_count,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new event.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    /// User ID of the event owner.
    pub owner_id: i32,
    /// Name of the event.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional venue or location text.
    pub location: Option<String>,
    /// Date the event is scheduled for.
    pub target_date: DateTime<Utc>,
    /// Start of the event.
    pub event_start: DateTime<Utc>,
    /// End of the event.
    pub event_end: DateTime<Utc>,
}
