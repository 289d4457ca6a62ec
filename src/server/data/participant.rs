use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

/// Roster row joining a participant with the user and profile behind it.
pub type ParticipantRow = (
    entity::event_participant::Model,
    Option<entity::user::Model>,
    Option<entity::profile::Model>,
);

pub struct ParticipantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a participant row for a user joining an event
    ///
    /// # Arguments
    /// - `event_id`: Event being joined
    /// - `user_id`: User joining the event
    /// - `accepted`: Whether the row starts accepted (owner auto-join)
    ///
    /// # Returns
    /// - `Ok(Model)`: The created participant
    /// - `Err(DbErr)`: Database error, including unique-index violations for
    ///   duplicate `(event_id, user_id)` pairs
    pub async fn create(
        &self,
        event_id: i32,
        user_id: i32,
        accepted: bool,
    ) -> Result<entity::event_participant::Model, DbErr> {
        entity::event_participant::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            accepted: ActiveValue::Set(accepted),
            declined: ActiveValue::Set(false),
            attended: ActiveValue::Set(None),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a participant by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The participant
    /// - `Ok(None)`: Participant not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::event_participant::Model>, DbErr> {
        entity::prelude::EventParticipant::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets the participant row for a user on an event
    ///
    /// # Arguments
    /// - `event_id`: Event to look up
    /// - `user_id`: User to look up
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The participant
    /// - `Ok(None)`: The user has not joined the event
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_event_and_user(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::event_participant::Model>, DbErr> {
        entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .filter(entity::event_participant::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Marks a participant as accepted
    ///
    /// # Arguments
    /// - `id`: Participant ID
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated participant
    /// - `Err(DbErr)`: Database error, including `RecordNotFound` when absent
    pub async fn set_accepted(&self, id: i32) -> Result<entity::event_participant::Model, DbErr> {
        let participant = entity::prelude::EventParticipant::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Participant {} not found",
                id
            )))?;

        let mut active_model: entity::event_participant::ActiveModel = participant.into();
        active_model.accepted = ActiveValue::Set(true);
        active_model.update(self.db).await
    }

    /// Marks a participant as declined
    ///
    /// The row is flagged rather than deleted, so the join relationship stays
    /// visible to both sides.
    ///
    /// # Arguments
    /// - `id`: Participant ID
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated participant
    /// - `Err(DbErr)`: Database error, including `RecordNotFound` when absent
    pub async fn set_declined(&self, id: i32) -> Result<entity::event_participant::Model, DbErr> {
        let participant = entity::prelude::EventParticipant::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Participant {} not found",
                id
            )))?;

        let mut active_model: entity::event_participant::ActiveModel = participant.into();
        active_model.declined = ActiveValue::Set(true);
        active_model.update(self.db).await
    }

    /// Sets the attendance flag to the given value
    ///
    /// Overwrites any previous value; repeated calls are safe.
    ///
    /// # Arguments
    /// - `id`: Participant ID
    /// - `attended`: New attendance value
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated participant
    /// - `Err(DbErr)`: Database error, including `RecordNotFound` when absent
    pub async fn set_attended(
        &self,
        id: i32,
        attended: bool,
    ) -> Result<entity::event_participant::Model, DbErr> {
        let participant = entity::prelude::EventParticipant::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Participant {} not found",
                id
            )))?;

        let mut active_model: entity::event_participant::ActiveModel = participant.into();
        active_model.attended = ActiveValue::Set(Some(attended));
        active_model.update(self.db).await
    }

    /// Gets all participants of an event with their users and profiles
    ///
    /// Rows are ordered by the profile first name ascending; ties keep
    /// insertion order (stable sort over rows fetched in id order).
    ///
    /// # Arguments
    /// - `event_id`: Event to list participants for
    ///
    /// # Returns
    /// - `Ok(rows)`: Roster rows with user and profile data where present
    /// - `Err(DbErr)`: Database error
    pub async fn list_for_event(&self, event_id: i32) -> Result<Vec<ParticipantRow>, DbErr> {
        let participants = entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_participant::Column::Id)
            .all(self.db)
            .await?;

        let user_ids: Vec<i32> = participants.iter().map(|p| p.user_id).collect();

        let mut users: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut profiles: HashMap<i32, entity::profile::Model> = entity::prelude::Profile::find()
            .filter(entity::profile::Column::UserId.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.user_id, p))
            .collect();

        let mut rows: Vec<ParticipantRow> = participants
            .into_iter()
            .map(|participant| {
                let user = users.remove(&participant.user_id);
                let profile = profiles.remove(&participant.user_id);
                (participant, user, profile)
            })
            .collect();

        rows.sort_by(|a, b| {
            let left = a.2.as_ref().map(|p| p.first_name.as_str()).unwrap_or("");
            let right = b.2.as_ref().map(|p| p.first_name.as_str()).unwrap_or("");
            left.cmp(right)
        });

        Ok(rows)
    }
}
