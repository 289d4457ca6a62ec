pub use sea_orm_migration::prelude::*;

mod m20260701_000001_create_user_table;
mod m20260701_000002_create_profile_table;
mod m20260702_000003_create_event_table;
mod m20260702_000004_create_event_participant_table;
mod m20260703_000005_create_notification_table;
mod m20260704_000006_create_chat_room_table;
mod m20260704_000007_create_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260701_000001_create_user_table::Migration),
            Box::new(m20260701_000002_create_profile_table::Migration),
            Box::new(m20260702_000003_create_event_table::Migration),
            Box::new(m20260702_000004_create_event_participant_table::Migration),
            Box::new(m20260703_000005_create_notification_table::Migration),
            Box::new(m20260704_000006_create_chat_room_table::Migration),
            Box::new(m20260704_000007_create_message_table::Migration),
        ]
    }
}
