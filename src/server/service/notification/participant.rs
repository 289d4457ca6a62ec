//! Participation notification content.
//!
//! Builds the notifications triggered by participation transitions: a join
//! request addressed to the event owner, and the accept/decline outcomes
//! addressed to the joining user. Persisted content is the sentence without
//! the sender name; the live payload prefixes the sender's first name.

use crate::server::{
    error::AppError,
    model::{
        event::Event,
        notification::{EmitNotificationParams, NotificationKind},
    },
};

use super::NotificationService;

impl NotificationService<'_> {
    /// Notifies the event owner that a user requested to join.
    ///
    /// Emits a `CONFIRMATION` notification to the owner; this is the
    /// pending-decision record removed once the owner accepts or declines.
    ///
    /// # Arguments
    /// - `event` - Event being joined
    /// - `sender_id` - User requesting to join
    ///
    /// # Returns
    /// - `Ok(())` - Notification persisted (and pushed when the owner is live)
    /// - `Err(AppError::DbErr)` - Persistence failed
    pub async fn participant_joined(
        &self,
        event: &Event,
        sender_id: i32,
    ) -> Result<(), AppError> {
        self.emit(EmitNotificationParams {
            recipient_id: event.owner_id,
            sender_id: Some(sender_id),
            event_id: Some(event.id),
            content: format!("will be attending your event \"{}\"!", event.name),
            kind: NotificationKind::Confirmation,
        })
        .await?;

        Ok(())
    }

    /// Notifies a joining user that the owner accepted them.
    ///
    /// # Arguments
    /// - `event` - Event the user was accepted into
    /// - `recipient_id` - The accepted user
    ///
    /// # Returns
    /// - `Ok(())` - Notification persisted (and pushed when the user is live)
    /// - `Err(AppError::DbErr)` - Persistence failed
    pub async fn participant_accepted(
        &self,
        event: &Event,
        recipient_id: i32,
    ) -> Result<(), AppError> {
        self.emit(EmitNotificationParams {
            recipient_id,
            sender_id: Some(event.owner_id),
            event_id: Some(event.id),
            content: format!("accepted you into the event \"{}\"", event.name),
            kind: NotificationKind::Message,
        })
        .await?;

        Ok(())
    }

    /// Notifies a joining user that the owner declined them.
    ///
    /// # Arguments
    /// - `event` - Event the user was declined from
    /// - `recipient_id` - The declined user
    ///
    /// # Returns
    /// - `Ok(())` - Notification persisted (and pushed when the user is live)
    /// - `Err(AppError::DbErr)` - Persistence failed
    pub async fn participant_declined(
        &self,
        event: &Event,
        recipient_id: i32,
    ) -> Result<(), AppError> {
        self.emit(EmitNotificationParams {
            recipient_id,
            sender_id: Some(event.owner_id),
            event_id: Some(event.id),
            content: format!("declined your request to join the event \"{}\"", event.name),
            kind: NotificationKind::Message,
        })
        .await?;

        Ok(())
    }
}
