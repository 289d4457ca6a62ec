use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::event::{CreateEventDto, EventDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::event::CreateEventParams,
        service::event::EventService,
        state::AppState,
    },
};

/// POST /api/events
/// Create an event owned by the caller; the owner joins pre-accepted
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    dto.validate()?;

    let event = EventService::new(&state.db, &state.registry)
        .create(CreateEventParams {
            owner_id: user.id,
            name: dto.name,
            description: dto.description,
            location: dto.location,
            target_date: dto.target_date,
            event_start: dto.event_start,
            event_end: dto.event_end,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(EventDto::from(event))))
}

/// GET /api/events/me
/// List the caller's own events
pub async fn my_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let events = EventService::new(&state.db, &state.registry)
        .find_by_owner(user.id)
        .await?;

    let dtos: Vec<EventDto> = events.into_iter().map(EventDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/events/{id}
/// Get one event by id
pub async fn get_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let event = EventService::new(&state.db, &state.registry)
        .find_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(EventDto::from(event))))
}

/// DELETE /api/events/{event_id}/cancel
/// Cancel an event (owner only) and alert every participant
pub async fn cancel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::EventOwner(event_id)])
        .await?;

    EventService::new(&state.db, &state.registry)
        .cancel(event_id)
        .await?;

    Ok(StatusCode::OK)
}
