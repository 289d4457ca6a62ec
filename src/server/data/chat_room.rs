use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct ChatRoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatRoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a chat room
    ///
    /// # Arguments
    /// - `is_group`: Whether the room is a group chat
    ///
    /// # Returns
    /// - `Ok(Model)`: The created chat room
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, is_group: bool) -> Result<entity::chat_room::Model, DbErr> {
        entity::chat_room::ActiveModel {
            is_group: ActiveValue::Set(is_group),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a chat room by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The chat room
    /// - `Ok(None)`: Chat room not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::chat_room::Model>, DbErr> {
        entity::prelude::ChatRoom::find_by_id(id).one(self.db).await
    }

    /// Gets all chat rooms of the requested kind, newest first
    ///
    /// # Arguments
    /// - `is_group`: Whether to list group chats or direct chats
    ///
    /// # Returns
    /// - `Ok(rooms)`: Vector of chat rooms
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self, is_group: bool) -> Result<Vec<entity::chat_room::Model>, DbErr> {
        entity::prelude::ChatRoom::find()
            .filter(entity::chat_room::Column::IsGroup.eq(is_group))
            .order_by_desc(entity::chat_room::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
