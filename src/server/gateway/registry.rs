//! Connection registry mapping users to live notification sessions.
//!
//! The registry is ephemeral process-local state: it is rebuilt from scratch
//! on restart and an entry lives exactly as long as its WebSocket connection.
//! Only the most recent session per user is retained; a reconnect replaces
//! the previous binding and earlier sessions are never targeted again.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use super::PushMessage;

/// Handle to one live push-capable session.
///
/// Cloning the handle clones the sender half of the session's channel; the
/// receiving half is owned by the WebSocket task that forwards frames to the
/// transport.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    id: Uuid,
    sender: mpsc::UnboundedSender<PushMessage>,
}

impl SessionHandle {
    /// Creates a handle around the sender half of a session channel.
    ///
    /// # Arguments
    /// - `sender` - Channel the WebSocket task drains into the transport
    ///
    /// # Returns
    /// - `SessionHandle` - New handle with a fresh session id
    pub fn new(sender: mpsc::UnboundedSender<PushMessage>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
        }
    }

    /// Returns the unique id of this session.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Queues a frame for delivery on this session.
    ///
    /// Delivery is fire-and-forget: a `true` return only means the frame was
    /// handed to the session task, not that the client received it.
    ///
    /// # Arguments
    /// - `message` - Frame to deliver
    ///
    /// # Returns
    /// - `true` - Frame queued on the session channel
    /// - `false` - The session task has gone away
    pub fn send(&self, message: PushMessage) -> bool {
        self.sender.send(message).is_ok()
    }
}

/// Registry of currently connected notification sessions.
///
/// An explicit owned component injected through `AppState` wherever emission
/// or connection lifecycle occurs. Entries are small and operations are O(1),
/// so a single exclusive-access map is sufficient under concurrent
/// register/unregister/lookup.
#[derive(Debug, Clone, Default)]
pub struct ConnectionRegistry {
    sessions: Arc<RwLock<HashMap<i32, SessionHandle>>>,
}

impl ConnectionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Binds a user to a session, replacing any prior binding.
    ///
    /// Only the most recent session receives pushes; an earlier session for
    /// the same user becomes orphaned even if its transport is still open.
    ///
    /// # Arguments
    /// - `user_id` - Authenticated user the session belongs to
    /// - `handle` - Session handle to bind
    pub async fn register(&self, user_id: i32, handle: SessionHandle) {
        let previous = self.sessions.write().await.insert(user_id, handle);
        if previous.is_some() {
            tracing::debug!("Replaced existing session binding for user {}", user_id);
        }
    }

    /// Removes the binding owned by the given session, if any.
    ///
    /// A no-op when the handle was never registered or has already been
    /// replaced by a newer session (the replacement must keep its binding).
    ///
    /// # Arguments
    /// - `session_id` - Id of the disconnecting session
    ///
    /// # Returns
    /// - `Some(user_id)` - The user whose binding was removed
    /// - `None` - No binding was owned by this session
    pub async fn unregister(&self, session_id: Uuid) -> Option<i32> {
        let mut sessions = self.sessions.write().await;
        let user_id = sessions
            .iter()
            .find(|(_, handle)| handle.id() == session_id)
            .map(|(user_id, _)| *user_id)?;
        sessions.remove(&user_id);
        Some(user_id)
    }

    /// Looks up the live session of a user.
    ///
    /// A pure read; a present handle does not imply delivery will succeed.
    ///
    /// # Arguments
    /// - `user_id` - User to look up
    ///
    /// # Returns
    /// - `Some(SessionHandle)` - Clone of the current session handle
    /// - `None` - The user has no registered session
    pub async fn lookup(&self, user_id: i32) -> Option<SessionHandle> {
        self.sessions.read().await.get(&user_id).cloned()
    }

    /// Pushes a frame to a user's live session, if one exists.
    ///
    /// Send failures are logged and swallowed; they must never fail the
    /// business operation that triggered the push.
    ///
    /// # Arguments
    /// - `user_id` - Recipient user
    /// - `message` - Frame to deliver
    ///
    /// # Returns
    /// - `true` - A registered session accepted the frame
    /// - `false` - No session was registered, or the session task is gone
    pub async fn push(&self, user_id: i32, message: PushMessage) -> bool {
        match self.lookup(user_id).await {
            Some(handle) => {
                let sent = handle.send(message);
                if !sent {
                    tracing::warn!(
                        "Dropping push for user {}: session task has gone away",
                        user_id
                    );
                }
                sent
            }
            None => false,
        }
    }
}
