//! Participation state machine.
//!
//! Governs the lifecycle of a join relationship between a user and an event:
//! invited → accepted xor declined, with attended/absent reachable only once
//! accepted. Transitions persist flag updates and trigger notification
//! emission on success.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, participant::ParticipantRepository},
    error::AppError,
    gateway::registry::ConnectionRegistry,
    model::{
        event::Event,
        participant::{Participant, ParticipantAttendance, ParticipantWithUser},
        user::UserSummary,
    },
    service::notification::NotificationService,
};

pub struct ParticipantService<'a> {
    db: &'a DatabaseConnection,
    registry: &'a ConnectionRegistry,
}

impl<'a> ParticipantService<'a> {
    pub fn new(db: &'a DatabaseConnection, registry: &'a ConnectionRegistry) -> Self {
        Self { db, registry }
    }

    /// Joins a user to an event
    ///
    /// Creates the participant in the invited state, or directly accepted when
    /// `pre_accepted` is set (the owner auto-joining their own event). A
    /// pre-accepted join counts as an acceptance and advances the member
    /// count; an invited join notifies the event owner instead.
    ///
    /// # Arguments
    /// - `event_id`: Event to join
    /// - `user_id`: User joining the event
    /// - `pre_accepted`: Whether the participant starts accepted
    ///
    /// # Returns
    /// - `Ok(participant_id)`: ID of the created participant
    /// - `Err(AppError::NotFound)`: Event does not exist
    /// - `Err(AppError::Conflict)`: The user already joined this event
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn join(
        &self,
        event_id: i32,
        user_id: i32,
        pre_accepted: bool,
    ) -> Result<i32, AppError> {
        tracing::info!("Adding a participant to event {}", event_id);

        let repo = ParticipantRepository::new(self.db);
        let event_repo = EventRepository::new(self.db);

        let event = event_repo
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if repo
            .get_by_event_and_user(event_id, user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("User already joined event".to_string()));
        }

        let participant = repo.create(event_id, user_id, pre_accepted).await?;

        if pre_accepted {
            event_repo.increment_member_count(event_id).await?;
        } else {
            NotificationService::new(self.db, self.registry)
                .participant_joined(&Event::from_entity(event), user_id)
                .await?;
        }

        tracing::info!("Participant {} added to event {}", participant.id, event_id);

        Ok(participant.id)
    }

    /// Accepts a join request
    ///
    /// Transitions the participant to accepted, advances the event's member
    /// count by exactly one, removes the owner's pending-decision
    /// notification, and notifies the joining user. Not idempotent: a second
    /// accept fails with a conflict and the member count stays unchanged.
    ///
    /// # Arguments
    /// - `participant_id`: Participant to accept
    ///
    /// # Returns
    /// - `Ok(())`: Participant accepted
    /// - `Err(AppError::Conflict)`: Participant unknown or already accepted
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn accept(&self, participant_id: i32) -> Result<(), AppError> {
        tracing::info!("Accepting participant {}", participant_id);

        let repo = ParticipantRepository::new(self.db);

        let participant = repo.get_by_id(participant_id).await?.ok_or_else(|| {
            AppError::Conflict("User is not a participant of the event".to_string())
        })?;

        if participant.accepted {
            return Err(AppError::Conflict(
                "Participant already accepted".to_string(),
            ));
        }

        repo.set_accepted(participant_id).await?;

        let event_repo = EventRepository::new(self.db);
        event_repo.increment_member_count(participant.event_id).await?;

        let event = event_repo
            .get_by_id(participant.event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
        let event = Event::from_entity(event);

        let notifier = NotificationService::new(self.db, self.registry);
        notifier.delete_pending(event.id, event.owner_id).await?;
        notifier
            .participant_accepted(&event, participant.user_id)
            .await?;

        tracing::info!("Participant {} accepted", participant_id);

        Ok(())
    }

    /// Declines a join request
    ///
    /// Flags the participant as declined (the row is kept), removes the
    /// owner's pending-decision notification, and notifies the joining user.
    ///
    /// # Arguments
    /// - `participant_id`: Participant to decline
    ///
    /// # Returns
    /// - `Ok(())`: Participant declined
    /// - `Err(AppError::Conflict)`: Participant unknown
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn decline(&self, participant_id: i32) -> Result<(), AppError> {
        tracing::info!("Declining participant {}", participant_id);

        let repo = ParticipantRepository::new(self.db);

        let participant = repo.get_by_id(participant_id).await?.ok_or_else(|| {
            AppError::Conflict("User is not a participant of the event".to_string())
        })?;

        repo.set_declined(participant_id).await?;

        let event_repo = EventRepository::new(self.db);
        let event = event_repo
            .get_by_id(participant.event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
        let event = Event::from_entity(event);

        let notifier = NotificationService::new(self.db, self.registry);
        notifier.delete_pending(event.id, event.owner_id).await?;
        notifier
            .participant_declined(&event, participant.user_id)
            .await?;

        tracing::info!("Participant {} declined", participant_id);

        Ok(())
    }

    /// Marks a participant as attended
    ///
    /// Overwrites the attendance flag unconditionally; repeated calls are
    /// safe and leave the last-set state.
    ///
    /// # Arguments
    /// - `participant_id`: Participant to mark
    ///
    /// # Returns
    /// - `Ok(())`: Attendance recorded
    /// - `Err(AppError::NotFound)`: Participant unknown
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn attend(&self, participant_id: i32) -> Result<(), AppError> {
        self.set_attendance(participant_id, true).await
    }

    /// Marks a participant as absent
    ///
    /// Overwrites the attendance flag unconditionally; repeated calls are
    /// safe and leave the last-set state.
    ///
    /// # Arguments
    /// - `participant_id`: Participant to mark
    ///
    /// # Returns
    /// - `Ok(())`: Absence recorded
    /// - `Err(AppError::NotFound)`: Participant unknown
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn absence(&self, participant_id: i32) -> Result<(), AppError> {
        self.set_attendance(participant_id, false).await
    }

    async fn set_attendance(&self, participant_id: i32, attended: bool) -> Result<(), AppError> {
        let repo = ParticipantRepository::new(self.db);

        repo.get_by_id(participant_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Participant not found".to_string()))?;

        repo.set_attended(participant_id, attended).await?;

        Ok(())
    }

    /// Resolves the participant id for a user on an event
    ///
    /// # Arguments
    /// - `event_id`: Event to look up
    /// - `user_id`: User to look up
    ///
    /// # Returns
    /// - `Ok(participant_id)`: ID of the participant row
    /// - `Err(AppError::NotFound)`: The user has not joined the event
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get_participant_id(&self, event_id: i32, user_id: i32) -> Result<i32, AppError> {
        let participant = ParticipantRepository::new(self.db)
            .get_by_event_and_user(event_id, user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("User is not a participant of the event".to_string())
            })?;

        Ok(participant.id)
    }

    /// Lists the participants of an event, excluding the owner
    ///
    /// Rows are ordered by profile first name ascending, ties by insertion
    /// order.
    ///
    /// # Arguments
    /// - `event_id`: Event to list participants for
    ///
    /// # Returns
    /// - `Ok(roster)`: Participants with their user identity
    /// - `Err(AppError::NotFound)`: Event does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get_participants(
        &self,
        event_id: i32,
    ) -> Result<Vec<ParticipantWithUser>, AppError> {
        let event = EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let rows = ParticipantRepository::new(self.db)
            .list_for_event(event_id)
            .await?;

        let roster = rows
            .into_iter()
            .filter(|(participant, _, _)| participant.user_id != event.owner_id)
            .filter_map(|(participant, user, profile)| {
                user.map(|user| ParticipantWithUser {
                    participant: Participant::from_entity(participant),
                    user: UserSummary::from_entities(user, profile),
                })
            })
            .collect();

        Ok(roster)
    }

    /// Gets the attendance projection of an event
    ///
    /// Partitions the roster returned by `get_participants` into attended and
    /// not-yet-attended, preserving the first-name ordering within each part.
    ///
    /// # Arguments
    /// - `event_id`: Event to project attendance for
    ///
    /// # Returns
    /// - `Ok(attendance)`: Partitioned roster
    /// - `Err(AppError::NotFound)`: Event does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get_participant_attendance(
        &self,
        event_id: i32,
    ) -> Result<ParticipantAttendance, AppError> {
        let roster = self.get_participants(event_id).await?;

        let (attends, not_yet_attends) = roster
            .into_iter()
            .partition(|entry| entry.participant.attended == Some(true));

        Ok(ParticipantAttendance {
            attends,
            not_yet_attends,
        })
    }
}
