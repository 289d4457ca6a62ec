use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatRoom::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatRoom::Id))
                    .col(boolean(ChatRoom::IsGroup).default(false))
                    .col(
                        timestamp(ChatRoom::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatRoom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatRoom {
    Table,
    Id,
    IsGroup,
    CreatedAt,
}
