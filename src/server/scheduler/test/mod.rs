use crate::server::{
    data::event::EventRepository, gateway::registry::ConnectionRegistry,
    scheduler::event_reminders::run_daily_sweep,
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};


/// Counts REMINDER notification rows for an event.
async fn reminder_count(db: &sea_orm::DatabaseConnection, event_id: i32) -> usize {
    entity::prelude::Notification::find()
        .filter(entity::notification::Column::EventId.eq(event_id))
        .filter(entity::notification::Column::Kind.eq("REMINDER"))
        .all(db)
        .await
        .unwrap()
        .len()
}
