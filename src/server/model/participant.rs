//! Domain models for event participation.
//!
//! Participation is stored as independent boolean flags (`accepted`,
//! `declined`, `attended`) for compatibility with the persisted shape; the
//! domain layer derives a single enumerated state from those flags so the
//! rest of the code reasons about one tagged value.

use chrono::{DateTime, Utc};

use super::user::UserSummary;

/// Enumerated participation lifecycle state.
///
/// `Attended` and `Absent` are sub-states reachable only from `Accepted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipationState {
    /// Join request created, awaiting the owner's decision.
    Invited,
    /// Accepted by the event owner.
    Accepted,
    /// Declined by the event owner.
    Declined,
    /// Accepted and marked as having attended.
    Attended,
    /// Accepted and marked as absent.
    Absent,
}

impl ParticipationState {
    /// Derives the enumerated state from the stored boolean flags.
    ///
    /// `accepted` takes precedence over a stray `declined` flag: decline only
    /// applies to not-yet-accepted participants, so an accepted row stays in
    /// the accepted branch regardless of the declined bit. The attendance
    /// flag is only meaningful once accepted.
    ///
    /// # Arguments
    /// - `accepted` - Whether the owner accepted the join request
    /// - `declined` - Whether the owner declined the join request
    /// - `attended` - Attendance flag, unset until tracked
    ///
    /// # Returns
    /// - `ParticipationState` - The derived lifecycle state
    pub fn from_flags(accepted: bool, declined: bool, attended: Option<bool>) -> Self {
        if accepted {
            match attended {
                Some(true) => Self::Attended,
                Some(false) => Self::Absent,
                None => Self::Accepted,
            }
        } else if declined {
            Self::Declined
        } else {
            Self::Invited
        }
    }

    /// Returns the canonical string form of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invited => "INVITED",
            Self::Accepted => "ACCEPTED",
            Self::Declined => "DECLINED",
            Self::Attended => "ATTENDED",
            Self::Absent => "ABSENT",
        }
    }
}

impl std::fmt::Display for ParticipationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join relationship between a user and an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    /// Unique identifier for the participant row.
    pub id: i32,
    /// Event the participant belongs to.
    pub event_id: i32,
    /// User joining the event.
    pub user_id: i32,
    /// Whether the owner accepted the join request.
    pub accepted: bool,
    /// Whether the owner declined the join request.
    pub declined: bool,
    /// Attendance flag, unset until tracked.
    pub attended: Option<bool>,
    /// Timestamp of the join request.
    pub joined_at: DateTime<Utc>,
}

impl Participant {
    /// Converts an entity model to a participant domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Participant` - The converted participant domain model
    pub fn from_entity(entity: entity::event_participant::Model) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            user_id: entity.user_id,
            accepted: entity.accepted,
            declined: entity.declined,
            attended: entity.attended,
            joined_at: entity.joined_at,
        }
    }

    /// Derives the enumerated lifecycle state from the stored flags.
    pub fn state(&self) -> ParticipationState {
        ParticipationState::from_flags(self.accepted, self.declined, self.attended)
    }
}

/// Roster entry pairing a participant with the joining user's identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantWithUser {
    pub participant: Participant,
    pub user: UserSummary,
}

/// Attendance projection partitioned into attended and not-yet-attended rosters.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantAttendance {
    pub attends: Vec<ParticipantWithUser>,
    pub not_yet_attends: Vec<ParticipantWithUser>,
}
