use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::server::model::participant::ParticipantWithUser;

/// Response returned when a user joins an event.
#[derive(Debug, Clone, Serialize)]
pub struct CreateParticipantResponseDto {
    pub participant_id: i32,
}

/// Roster entry combining participation state with the joining user's identity.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantDto {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub state: String,
    pub accepted: bool,
    pub declined: bool,
    pub attended: Option<bool>,
    pub joined_at: DateTime<Utc>,
    pub email: String,
    pub phone: Option<String>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<ParticipantWithUser> for ParticipantDto {
    fn from(entry: ParticipantWithUser) -> Self {
        Self {
            id: entry.participant.id,
            event_id: entry.participant.event_id,
            user_id: entry.participant.user_id,
            state: entry.participant.state().to_string(),
            accepted: entry.participant.accepted,
            declined: entry.participant.declined,
            attended: entry.participant.attended,
            joined_at: entry.participant.joined_at,
            email: entry.user.email,
            phone: entry.user.phone,
            username: entry.user.username,
            first_name: entry.user.first_name,
            last_name: entry.user.last_name,
        }
    }
}

/// Attendance projection partitioned into attended and not-yet-attended rosters.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantAttendanceDto {
    pub attends: Vec<ParticipantDto>,
    pub not_yet_attends: Vec<ParticipantDto>,
}
