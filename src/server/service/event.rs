//! Event lifecycle orchestration.
//!
//! Creation auto-joins the owner as a pre-accepted participant; cancellation
//! flags the event and fans an alert out to every current participant through
//! the notification emitter.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    gateway::registry::ConnectionRegistry,
    model::event::{CreateEventParams, Event},
    service::{notification::NotificationService, participant::ParticipantService},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    registry: &'a ConnectionRegistry,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection, registry: &'a ConnectionRegistry) -> Self {
        Self { db, registry }
    }

    /// Creates an event and auto-joins its owner
    ///
    /// The owner is joined pre-accepted, which counts as the first acceptance
    /// and leaves the member count at one.
    ///
    /// # Arguments
    /// - `params`: Event creation parameters
    ///
    /// # Returns
    /// - `Ok(Event)`: The created event
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        tracing::info!("Creating event for user {}", params.owner_id);

        let repo = EventRepository::new(self.db);
        let owner_id = params.owner_id;
        let event = repo.create(params).await?;

        ParticipantService::new(self.db, self.registry)
            .join(event.id, owner_id, true)
            .await?;

        // Re-read for the member count advanced by the owner's auto-join.
        let event = repo
            .get_by_id(event.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found after creation".to_string()))?;

        tracing::info!("Event {} created", event.id);

        Ok(Event::from_entity(event))
    }

    /// Gets an event by ID
    ///
    /// # Arguments
    /// - `event_id`: Event to fetch
    ///
    /// # Returns
    /// - `Ok(Event)`: The event
    /// - `Err(AppError::NotFound)`: Event does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn find_by_id(&self, event_id: i32) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        Ok(Event::from_entity(event))
    }

    /// Gets all events owned by a user
    ///
    /// # Arguments
    /// - `owner_id`: User ID of the event owner
    ///
    /// # Returns
    /// - `Ok(events)`: Vector of events ordered by target date ascending
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Event>, AppError> {
        let events = EventRepository::new(self.db)
            .get_by_owner(owner_id)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect();

        Ok(events)
    }

    /// Cancels an event and alerts every participant
    ///
    /// Marks the event canceled, then fans an `ALERT` notification out to all
    /// current participants through the same emitter the reminder sweep uses.
    ///
    /// # Arguments
    /// - `event_id`: Event to cancel
    ///
    /// # Returns
    /// - `Ok(())`: Event canceled and participants alerted
    /// - `Err(AppError::NotFound)`: Event does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn cancel(&self, event_id: i32) -> Result<(), AppError> {
        tracing::info!("Canceling event {}", event_id);

        let repo = EventRepository::new(self.db);

        repo.get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let event = repo.set_canceled(event_id).await?;

        let notified = NotificationService::new(self.db, self.registry)
            .event_canceled(&Event::from_entity(event))
            .await?;

        tracing::info!("Event {} canceled, {} participant(s) alerted", event_id, notified);

        Ok(())
    }
}
