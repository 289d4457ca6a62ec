use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::server::model::event::Event;

/// Payload for creating a new event.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventDto {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(length(max = 2000, message = "Description is too long"))]
    pub description: Option<String>,
    #[validate(length(max = 200, message = "Location is too long"))]
    pub location: Option<String>,
    pub target_date: DateTime<Utc>,
    pub event_start: DateTime<Utc>,
    pub event_end: DateTime<Utc>,
}

/// Event representation returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct EventDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub target_date: DateTime<Utc>,
    pub event_start: DateTime<Utc>,
    pub event_end: DateTime<Utc>,
    pub is_canceled: bool,
    pub is_done: bool,
    pub member_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            owner_id: event.owner_id,
            name: event.name,
            description: event.description,
            location: event.location,
            target_date: event.target_date,
            event_start: event.event_start,
            event_end: event.event_end,
            is_canceled: event.is_canceled,
            is_done: event.is_done,
            member_count: event.member_count,
            created_at: event.created_at,
        }
    }
}
