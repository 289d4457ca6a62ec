//! Chat factories for creating test chat rooms and messages.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a chat room.
///
/// # Arguments
/// - `db` - Database connection
/// - `is_group` - Whether the room is a group chat
///
/// # Returns
/// - `Ok(entity::chat_room::Model)` - Created chat room entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_chat_room(
    db: &DatabaseConnection,
    is_group: bool,
) -> Result<entity::chat_room::Model, DbErr> {
    entity::chat_room::ActiveModel {
        id: ActiveValue::NotSet,
        is_group: ActiveValue::Set(is_group),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates a message in a chat room.
///
/// # Arguments
/// - `db` - Database connection
/// - `chat_room_id` - Room the message belongs to
/// - `user_id` - Author of the message
/// - `content` - Message text
///
/// # Returns
/// - `Ok(entity::message::Model)` - Created message entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_message(
    db: &DatabaseConnection,
    chat_room_id: i32,
    user_id: i32,
    content: impl Into<String>,
) -> Result<entity::message::Model, DbErr> {
    entity::message::ActiveModel {
        id: ActiveValue::NotSet,
        chat_room_id: ActiveValue::Set(chat_room_id),
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set(content.into()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
