use crate::server::{
    data::{chat_room::ChatRoomRepository, message::MessageRepository},
    model::chat::StoreMessageParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod message;
mod room;
