use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_user_table::User, m20260702_000003_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(EventParticipant::Id))
                    .col(integer(EventParticipant::EventId))
                    .col(integer(EventParticipant::UserId))
                    .col(boolean(EventParticipant::Accepted).default(false))
                    .col(boolean(EventParticipant::Declined).default(false))
                    .col(boolean_null(EventParticipant::Attended))
                    .col(
                        timestamp(EventParticipant::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_participant_event_id")
                            .from(EventParticipant::Table, EventParticipant::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_participant_user_id")
                            .from(EventParticipant::Table, EventParticipant::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A user can join an event at most once.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_event_participant_event_user")
                    .table(EventParticipant::Table)
                    .col(EventParticipant::EventId)
                    .col(EventParticipant::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventParticipant {
    Table,
    Id,
    EventId,
    UserId,
    Accepted,
    Declined,
    Attended,
    JoinedAt,
}
