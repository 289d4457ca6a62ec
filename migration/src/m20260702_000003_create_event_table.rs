use sea_orm_migration::{prelude::*, schema::*};

use super::m20260701_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::OwnerId))
                    .col(string(Event::Name))
                    .col(text_null(Event::Description))
                    .col(string_null(Event::Location))
                    .col(timestamp(Event::TargetDate))
                    .col(timestamp(Event::EventStart))
                    .col(timestamp(Event::EventEnd))
                    .col(boolean(Event::IsCanceled).default(false))
                    .col(boolean(Event::IsDone).default(false))
                    .col(integer(Event::MemberCount).default(0))
                    .col(
                        timestamp(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_owner_id")
                            .from(Event::Table, Event::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    Location,
    TargetDate,
    EventStart,
    EventEnd,
    IsCanceled,
    IsDone,
    MemberCount,
    CreatedAt,
}
