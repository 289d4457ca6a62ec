//! WebSocket upgrade handlers for the notification and chat channels.
//!
//! The notification channel requires a bearer credential supplied as a
//! `token` query parameter at connect time. A session presenting an invalid
//! or missing credential is left unregistered: the transport stays open but
//! the session receives nothing. The chat channel has no per-user identity;
//! every connected session is subscribed to all room traffic.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;
use validator::Validate;

use crate::{
    model::chat::{MessageDto, MessageReplyDto},
    server::{
        gateway::{registry::SessionHandle, PushMessage},
        service::chat::ChatService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct WsAuthQuery {
    pub token: Option<String>,
}

/// GET /ws/notifications
/// Upgrades to the per-user notification push channel
pub async fn notifications_ws(
    State(state): State<AppState>,
    Query(query): Query<WsAuthQuery>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| handle_notification_socket(socket, state, query.token))
}

/// GET /ws/chat
/// Upgrades to the chat relay channel
pub async fn chat_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_chat_socket(socket, state))
}

/// Runs one notification session until its transport closes.
///
/// Verifies the bearer credential, registers the session for its user, and
/// forwards queued push frames to the socket. On close the session is
/// unregistered; a stale disconnect after a reconnect leaves the newer
/// binding untouched.
async fn handle_notification_socket(socket: WebSocket, state: AppState, token: Option<String>) {
    let user_id = token.as_deref().and_then(|token| {
        state
            .tokens
            .verify(token)
            .map_err(|e| tracing::debug!("Rejected notification session credential: {}", e))
            .ok()
            .map(|claims| claims.sub)
    });

    let (mut sink, mut stream) = socket.split();

    let Some(user_id) = user_id else {
        // Unauthenticated sessions stay open at the transport layer but are
        // never registered and receive nothing.
        while let Some(Ok(frame)) = stream.next().await {
            if matches!(frame, Message::Close(_)) {
                break;
            }
        }
        return;
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = SessionHandle::new(tx);
    let session_id = handle.id();
    state.registry.register(user_id, handle).await;
    tracing::info!("Notification session {} registered for user {}", session_id, user_id);

    loop {
        tokio::select! {
            outbound = rx.recv() => {
                match outbound {
                    Some(message) => {
                        let json = match serde_json::to_string(&message) {
                            Ok(json) => json,
                            Err(e) => {
                                tracing::error!("Failed to serialize push frame: {}", e);
                                continue;
                            }
                        };
                        if sink.send(Message::Text(json.into())).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }
            inbound = stream.next() => {
                match inbound {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    // The channel is push-only; other inbound frames are ignored.
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    state.registry.unregister(session_id).await;
    tracing::info!("Notification session {} closed for user {}", session_id, user_id);
}

/// Runs one chat session until its transport closes.
///
/// Subscribes the session to the hub, forwards broadcast frames to the
/// socket, and handles inbound `message` frames: validate, persist,
/// broadcast to the room, and acknowledge the author.
async fn handle_chat_socket(socket: WebSocket, state: AppState) {
    let (mut sink, mut stream) = socket.split();
    let (mut events, _count) = state.chat.connect();

    loop {
        tokio::select! {
            broadcast = events.recv() => {
                match broadcast {
                    Ok(message) => {
                        let json = match serde_json::to_string(&message) {
                            Ok(json) => json,
                            Err(e) => {
                                tracing::error!("Failed to serialize chat frame: {}", e);
                                continue;
                            }
                        };
                        if sink.send(Message::Text(json.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("Chat session lagged, skipped {} frames", skipped);
                        continue;
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
            inbound = stream.next() => {
                match inbound {
                    Some(Ok(Message::Text(text))) => {
                        let reply = handle_chat_frame(&state, &text).await;
                        let json = match serde_json::to_string(&PushMessage::MessageReply(reply)) {
                            Ok(json) => json,
                            Err(e) => {
                                tracing::error!("Failed to serialize chat reply: {}", e);
                                continue;
                            }
                        };
                        if sink.send(Message::Text(json.into())).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    state.chat.disconnect();
}

/// Validates, persists, and broadcasts one inbound chat frame.
///
/// Validation violations are collected per-field and returned to the author;
/// nothing is persisted or broadcast for an invalid frame.
async fn handle_chat_frame(state: &AppState, text: &str) -> MessageReplyDto {
    let dto: MessageDto = match serde_json::from_str(text) {
        Ok(dto) => dto,
        Err(e) => {
            return MessageReplyDto::error("Message isn't valid. Please try again.", Some(
                serde_json::json!({ "parse": e.to_string() }),
            ));
        }
    };

    if let Err(errors) = dto.validate() {
        let details = serde_json::to_value(&errors).ok();
        return MessageReplyDto::error("Message isn't valid. Please try again.", details);
    }

    match ChatService::new(&state.db).store(&dto).await {
        Ok(message) => {
            state.chat.broadcast(PushMessage::Message(message.into()));
            MessageReplyDto::success(dto)
        }
        Err(e) => {
            tracing::error!("Failed to store chat message: {}", e);
            MessageReplyDto::error("Message isn't valid. Please try again.", Some(
                serde_json::json!({ "store": e.to_string() }),
            ))
        }
    }
}
