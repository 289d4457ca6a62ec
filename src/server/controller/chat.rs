use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::chat::{ChatMessageDto, ChatRoomDto, CreateChatRoomDto, CreateChatRoomResponseDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::chat::ChatService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct ChatRoomQuery {
    #[serde(default)]
    pub is_group: bool,
}

/// POST /api/chats
/// Create a chat room
pub async fn create_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateChatRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let room = ChatService::new(&state.db).create_room(dto.is_group).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateChatRoomResponseDto { chat_room_id: room.id }),
    ))
}

/// GET /api/chats
/// List chat rooms of the requested kind with their latest message
pub async fn rooms(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ChatRoomQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let rooms = ChatService::new(&state.db).get_rooms(query.is_group).await?;

    let dtos: Vec<ChatRoomDto> = rooms
        .into_iter()
        .map(|(room, messages)| ChatRoomDto {
            id: room.id,
            is_group: room.is_group,
            created_at: room.created_at,
            messages: messages.into_iter().map(ChatMessageDto::from).collect(),
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/chats/{id}
/// Get a chat room with its full message history
pub async fn room_detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let (room, messages) = ChatService::new(&state.db).get_room_detail(id).await?;

    let dto = ChatRoomDto {
        id: room.id,
        is_group: room.is_group,
        created_at: room.created_at,
        messages: messages.into_iter().map(ChatMessageDto::from).collect(),
    };

    Ok((StatusCode::OK, Json(dto)))
}
