use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::notification::NotificationDto,
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::notification::NotificationService, state::AppState,
    },
};

/// GET /api/notifications
/// List the caller's notifications, newest first
pub async fn find_all(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let notifications = NotificationService::new(&state.db, &state.registry)
        .find_all(user.id)
        .await?;

    let dtos: Vec<NotificationDto> = notifications
        .into_iter()
        .map(NotificationDto::from)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
