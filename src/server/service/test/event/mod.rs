use crate::server::{
    error::AppError,
    gateway::registry::ConnectionRegistry,
    model::event::CreateEventParams,
    service::{event::EventService, participant::ParticipantService},
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn params(owner_id: i32) -> CreateEventParams {
    let start = Utc::now() + Duration::days(5);
    CreateEventParams {
        owner_id,
        name: "Garden Party".to_string(),
        description: Some("An afternoon in the garden".to_string()),
        location: Some("Backyard".to_string()),
        target_date: start,
        event_start: start,
        event_end: start + Duration::hours(3),
    }
}
