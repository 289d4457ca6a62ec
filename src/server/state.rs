//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Connection registry mapping users to live notification sessions
//! - Chat hub for relaying chat traffic to subscribed sessions
//! - Token service for verifying bearer credentials

use sea_orm::DatabaseConnection;

use super::{
    gateway::{chat::ChatHub, registry::ConnectionRegistry},
    service::auth::TokenService,
};

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `ConnectionRegistry` and `ChatHub` use `Arc` for shared state
/// - `TokenService` holds reference-counted key material
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// Registry of currently connected notification sessions.
    ///
    /// Maps authenticated user ids to their most recent live WebSocket session.
    /// Consulted on every notification emission and mutated on connect/disconnect.
    pub registry: ConnectionRegistry,

    /// Hub relaying chat messages and connection counts to chat sessions.
    pub chat: ChatHub,

    /// Verifier for bearer credentials presented by HTTP requests and
    /// WebSocket connections.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `registry` - Connection registry for live notification sessions
    /// - `chat` - Chat hub for the chat relay
    /// - `tokens` - Token service for credential verification
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        registry: ConnectionRegistry,
        chat: ChatHub,
        tokens: TokenService,
    ) -> Self {
        Self {
            db,
            registry,
            chat,
            tokens,
        }
    }
}
