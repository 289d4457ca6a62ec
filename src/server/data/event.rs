use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, QueryFilter, QueryOrder,
};

use crate::server::model::event::CreateEventParams;

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event
    ///
    /// # Arguments
    /// - `params`: Event creation parameters (owner, name, dates, optional text)
    ///
    /// # Returns
    /// - `Ok(Model)`: The created event
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateEventParams) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            location: ActiveValue::Set(params.location),
            target_date: ActiveValue::Set(params.target_date),
            event_start: ActiveValue::Set(params.event_start),
            event_end: ActiveValue::Set(params.event_end),
            is_canceled: ActiveValue::Set(false),
            is_done: ActiveValue::Set(false),
            member_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets an event by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The event
    /// - `Ok(None)`: Event not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    /// Gets all events owned by a user, upcoming first
    ///
    /// # Arguments
    /// - `owner_id`: User ID of the event owner
    ///
    /// # Returns
    /// - `Ok(events)`: Vector of events ordered by target date ascending
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::event::Column::TargetDate)
            .all(self.db)
            .await
    }

    /// Marks an event as canceled
    ///
    /// # Arguments
    /// - `id`: Event ID
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated event
    /// - `Err(DbErr)`: Database error, including `RecordNotFound` when absent
    pub async fn set_canceled(&self, id: i32) -> Result<entity::event::Model, DbErr> {
        let event = entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Event {} not found", id)))?;

        let mut active_model: entity::event::ActiveModel = event.into();
        active_model.is_canceled = ActiveValue::Set(true);
        active_model.update(self.db).await
    }

    /// Marks an event as done
    ///
    /// # Arguments
    /// - `id`: Event ID
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated event
    /// - `Err(DbErr)`: Database error, including `RecordNotFound` when absent
    pub async fn set_done(&self, id: i32) -> Result<entity::event::Model, DbErr> {
        let event = entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Event {} not found", id)))?;

        let mut active_model: entity::event::ActiveModel = event.into();
        active_model.is_done = ActiveValue::Set(true);
        active_model.update(self.db).await
    }

    /// Advances the accepted-member count by exactly one
    ///
    /// Issues a single `UPDATE ... SET member_count = member_count + 1` so the
    /// increment happens at the storage layer rather than read-modify-write in
    /// application code.
    ///
    /// # Arguments
    /// - `id`: Event ID
    ///
    /// # Returns
    /// - `Ok(())`: Counter advanced
    /// - `Err(DbErr)`: Database error
    pub async fn increment_member_count(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Event::update_many()
            .col_expr(
                entity::event::Column::MemberCount,
                Expr::col(entity::event::Column::MemberCount).add(1),
            )
            .filter(entity::event::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets events whose target date falls inside the reminder window
    ///
    /// Both window bounds are inclusive.
    ///
    /// # Arguments
    /// - `window_start`: Inclusive lower bound for the target date
    /// - `window_end`: Inclusive upper bound for the target date
    ///
    /// # Returns
    /// - `Ok(events)`: Vector of events inside the window
    /// - `Err(DbErr)`: Database error
    pub async fn find_in_reminder_window(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::TargetDate.between(window_start, window_end))
            .order_by_asc(entity::event::Column::TargetDate)
            .all(self.db)
            .await
    }
}
