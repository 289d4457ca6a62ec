use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::participant::{
        CreateParticipantResponseDto, ParticipantAttendanceDto, ParticipantDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::participant::ParticipantService,
        state::AppState,
    },
};

/// POST /api/events/{event_id}/participants/join
/// Join the caller to an event as an invited participant
pub async fn join(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let participant_id = ParticipantService::new(&state.db, &state.registry)
        .join(event_id, user.id, false)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateParticipantResponseDto { participant_id }),
    ))
}

/// GET /api/events/{event_id}/participants
/// List the event's roster, excluding the owner
pub async fn participants(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let roster = ParticipantService::new(&state.db, &state.registry)
        .get_participants(event_id)
        .await?;

    let dtos: Vec<ParticipantDto> = roster.into_iter().map(ParticipantDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/events/{event_id}/participants/attendance
/// Get the roster partitioned into attended and not-yet-attended
pub async fn attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let attendance = ParticipantService::new(&state.db, &state.registry)
        .get_participant_attendance(event_id)
        .await?;

    let dto = ParticipantAttendanceDto {
        attends: attendance
            .attends
            .into_iter()
            .map(ParticipantDto::from)
            .collect(),
        not_yet_attends: attendance
            .not_yet_attends
            .into_iter()
            .map(ParticipantDto::from)
            .collect(),
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// POST /api/events/{event_id}/participants/{user_id}/accept
/// Accept a join request (owner only)
pub async fn accept(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((event_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::EventOwner(event_id)])
        .await?;

    let service = ParticipantService::new(&state.db, &state.registry);
    let participant_id = service.get_participant_id(event_id, user_id).await?;
    service.accept(participant_id).await?;

    Ok(StatusCode::OK)
}

/// DELETE /api/events/{event_id}/participants/{user_id}/decline
/// Decline a join request (owner only)
pub async fn decline(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((event_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::EventOwner(event_id)])
        .await?;

    let service = ParticipantService::new(&state.db, &state.registry);
    let participant_id = service.get_participant_id(event_id, user_id).await?;
    service.decline(participant_id).await?;

    Ok(StatusCode::OK)
}

/// PUT /api/events/{event_id}/participants/{user_id}/attend
/// Mark a participant as attended
pub async fn attend(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((event_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = ParticipantService::new(&state.db, &state.registry);
    let participant_id = service.get_participant_id(event_id, user_id).await?;
    service.attend(participant_id).await?;

    Ok(StatusCode::OK)
}

/// PUT /api/events/{event_id}/participants/{user_id}/absent
/// Mark a participant as absent
pub async fn absence(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((event_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = ParticipantService::new(&state.db, &state.registry);
    let participant_id = service.get_participant_id(event_id, user_id).await?;
    service.absence(participant_id).await?;

    Ok(StatusCode::OK)
}
