//! Chat hub relaying room traffic to every subscribed session.
//!
//! Room membership is implicit: every connected chat session receives every
//! room's traffic at the transport layer. The hub also maintains a live
//! connection counter and announces it to all sessions whenever a session
//! connects or disconnects.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

use super::PushMessage;

/// Capacity of the broadcast channel backing the hub.
///
/// Slow consumers that fall further behind than this see a lag error and
/// skip ahead rather than stalling the relay.
const CHANNEL_CAPACITY: usize = 128;

/// Hub fanning chat frames out to all connected chat sessions.
#[derive(Debug, Clone)]
pub struct ChatHub {
    events: broadcast::Sender<PushMessage>,
    connected: Arc<AtomicUsize>,
}

impl ChatHub {
    /// Creates a hub with no connected sessions.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            events,
            connected: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Subscribes a new session to the hub.
    ///
    /// Increments the connection counter and announces the new count to all
    /// sessions, including the one just connected.
    ///
    /// # Returns
    /// - `(Receiver, usize)` - The session's event stream and the new count
    pub fn connect(&self) -> (broadcast::Receiver<PushMessage>, usize) {
        let receiver = self.events.subscribe();
        let count = self.connected.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!("Chat session connected. Total sessions: {}", count);
        self.broadcast(PushMessage::Users { count });
        (receiver, count)
    }

    /// Removes a session from the hub.
    ///
    /// Decrements the connection counter and announces the new count to the
    /// remaining sessions.
    ///
    /// # Returns
    /// - `usize` - The new connection count
    pub fn disconnect(&self) -> usize {
        let count = self
            .connected
            .fetch_sub(1, Ordering::SeqCst)
            .saturating_sub(1);
        tracing::info!("Chat session disconnected. Total sessions: {}", count);
        self.broadcast(PushMessage::Users { count });
        count
    }

    /// Broadcasts a frame to all subscribed sessions.
    ///
    /// Fire-and-forget: with no subscribers the frame is dropped, which is
    /// fine for transient relay traffic.
    ///
    /// # Arguments
    /// - `message` - Frame to broadcast
    pub fn broadcast(&self, message: PushMessage) {
        let _ = self.events.send(message);
    }

    /// Returns the current number of connected sessions.
    pub fn connected(&self) -> usize {
        self.connected.load(Ordering::SeqCst)
    }
}

impl Default for ChatHub {
    fn default() -> Self {
        Self::new()
    }
}
