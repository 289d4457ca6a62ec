use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::server::{
    controller::{chat, event, notification, participant},
    gateway::ws,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", post(event::create))
        .route("/api/events/me", get(event::my_events))
        .route("/api/events/{id}", get(event::get_by_id))
        .route("/api/events/{event_id}/cancel", delete(event::cancel))
        .route(
            "/api/events/{event_id}/participants/join",
            post(participant::join),
        )
        .route(
            "/api/events/{event_id}/participants",
            get(participant::participants),
        )
        .route(
            "/api/events/{event_id}/participants/attendance",
            get(participant::attendance),
        )
        .route(
            "/api/events/{event_id}/participants/{user_id}/accept",
            post(participant::accept),
        )
        .route(
            "/api/events/{event_id}/participants/{user_id}/decline",
            delete(participant::decline),
        )
        .route(
            "/api/events/{event_id}/participants/{user_id}/attend",
            put(participant::attend),
        )
        .route(
            "/api/events/{event_id}/participants/{user_id}/absent",
            put(participant::absence),
        )
        .route("/api/notifications", get(notification::find_all))
        .route("/api/chats", post(chat::create_room).get(chat::rooms))
        .route("/api/chats/{id}", get(chat::room_detail))
        .route("/ws/notifications", get(ws::notifications_ws))
        .route("/ws/chat", get(ws::chat_ws))
}
