//! Real-time delivery layer.
//!
//! The gateway owns everything that touches live WebSocket sessions:
//!
//! - **Registry** (`registry`) - maps authenticated users to their most recent
//!   push-capable session
//! - **Chat hub** (`chat`) - relays chat traffic and connection counts to all
//!   subscribed sessions
//! - **WebSocket handlers** (`ws`) - axum upgrade handlers wiring sockets to
//!   the registry and the hub
//!
//! Delivery over these channels is best-effort: a send failure is logged and
//! swallowed, never surfaced to the business operation that triggered it. The
//! durable notification record written before any push is the fallback for
//! offline or unreachable recipients.

pub mod chat;
pub mod registry;
pub mod ws;

use serde::Serialize;

use crate::model::{
    chat::{ChatMessageDto, MessageReplyDto},
    notification::NotificationPushDto,
};

/// Envelope for every frame pushed over a live session.
///
/// Serialized as `{ "event": "...", "data": ... }`, matching the named-event
/// wire shape consumed by clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum PushMessage {
    /// A notification addressed to the session's user.
    Notification(NotificationPushDto),
    /// Current number of connected chat sessions.
    Users { count: usize },
    /// A chat message broadcast to the room.
    Message(ChatMessageDto),
    /// Acknowledgment of an inbound chat frame, sent only to its author.
    MessageReply(MessageReplyDto),
}
