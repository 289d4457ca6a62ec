use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::chat::StoreMessageParams;

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a chat message as a child of its room
    ///
    /// # Arguments
    /// - `params`: Message parameters (room, author, content)
    ///
    /// # Returns
    /// - `Ok(Model)`: The created message
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: StoreMessageParams,
    ) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            chat_room_id: ActiveValue::Set(params.chat_room_id),
            user_id: ActiveValue::Set(params.user_id),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets messages of a room, newest first
    ///
    /// # Arguments
    /// - `chat_room_id`: Room to read messages from
    /// - `limit`: Optional cap on the number of returned messages
    ///
    /// # Returns
    /// - `Ok(messages)`: Vector of messages ordered by creation time descending
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_room(
        &self,
        chat_room_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<entity::message::Model>, DbErr> {
        let mut query = entity::prelude::Message::find()
            .filter(entity::message::Column::ChatRoomId.eq(chat_room_id))
            .order_by_desc(entity::message::Column::CreatedAt)
            .order_by_desc(entity::message::Column::Id);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        query.all(self.db).await
    }
}
