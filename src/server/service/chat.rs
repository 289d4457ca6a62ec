//! Chat room and message persistence.

use sea_orm::DatabaseConnection;

use crate::{
    model::chat::MessageDto,
    server::{
        data::{chat_room::ChatRoomRepository, message::MessageRepository},
        error::AppError,
        model::chat::{ChatMessage, ChatRoom, StoreMessageParams},
    },
};

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a validated chat message as a child of its room
    ///
    /// # Arguments
    /// - `message`: Validated inbound message frame
    ///
    /// # Returns
    /// - `Ok(ChatMessage)`: The stored message
    /// - `Err(AppError::NotFound)`: The chat room does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn store(&self, message: &MessageDto) -> Result<ChatMessage, AppError> {
        tracing::info!("Storing a new message in chatroom {}", message.chat_id);

        ChatRoomRepository::new(self.db)
            .get_by_id(message.chat_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chat room not found".to_string()))?;

        let stored = MessageRepository::new(self.db)
            .create(StoreMessageParams {
                chat_room_id: message.chat_id,
                user_id: message.user_id,
                content: message.content.clone(),
            })
            .await?;

        tracing::info!("Message stored in chatroom {}", message.chat_id);

        Ok(ChatMessage::from_entity(stored))
    }

    /// Creates a chat room
    ///
    /// # Arguments
    /// - `is_group`: Whether the room is a group chat
    ///
    /// # Returns
    /// - `Ok(ChatRoom)`: The created room
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn create_room(&self, is_group: bool) -> Result<ChatRoom, AppError> {
        tracing::info!("Creating chat room");

        let room = ChatRoomRepository::new(self.db).create(is_group).await?;

        Ok(ChatRoom::from_entity(room))
    }

    /// Gets chat rooms of the requested kind with their latest message
    ///
    /// # Arguments
    /// - `is_group`: Whether to list group chats or direct chats
    ///
    /// # Returns
    /// - `Ok(rooms)`: Rooms paired with at most one latest message each
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get_rooms(
        &self,
        is_group: bool,
    ) -> Result<Vec<(ChatRoom, Vec<ChatMessage>)>, AppError> {
        let rooms = ChatRoomRepository::new(self.db).get_all(is_group).await?;
        let message_repo = MessageRepository::new(self.db);

        let mut result = Vec::with_capacity(rooms.len());
        for room in rooms {
            let messages = message_repo
                .get_by_room(room.id, Some(1))
                .await?
                .into_iter()
                .map(ChatMessage::from_entity)
                .collect();
            result.push((ChatRoom::from_entity(room), messages));
        }

        Ok(result)
    }

    /// Gets a chat room with its full message history, newest first
    ///
    /// # Arguments
    /// - `chat_room_id`: Room to fetch
    ///
    /// # Returns
    /// - `Ok((room, messages))`: The room and its messages
    /// - `Err(AppError::NotFound)`: The chat room does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get_room_detail(
        &self,
        chat_room_id: i32,
    ) -> Result<(ChatRoom, Vec<ChatMessage>), AppError> {
        let room = ChatRoomRepository::new(self.db)
            .get_by_id(chat_room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chat room not found".to_string()))?;

        let messages = MessageRepository::new(self.db)
            .get_by_room(chat_room_id, None)
            .await?
            .into_iter()
            .map(ChatMessage::from_entity)
            .collect();

        Ok((ChatRoom::from_entity(room), messages))
    }
}
