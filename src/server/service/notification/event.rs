//! Event-level notification fan-out.
//!
//! Cancellation and reminder notifications address every current participant
//! of an event through the same persist-then-push emitter. The reminder path
//! is invoked by the daily sweep; cancellation is its owner-triggered
//! one-shot counterpart.

use crate::server::{
    data::participant::ParticipantRepository,
    error::AppError,
    model::{
        event::Event,
        notification::{EmitNotificationParams, NotificationKind},
    },
};

use super::NotificationService;

impl NotificationService<'_> {
    /// Fans an `ALERT` notification out to every participant of a canceled event.
    ///
    /// # Arguments
    /// - `event` - The canceled event
    ///
    /// # Returns
    /// - `Ok(count)` - Number of participants notified
    /// - `Err(AppError::DbErr)` - Reading the roster or persisting a record failed
    pub async fn event_canceled(&self, event: &Event) -> Result<usize, AppError> {
        let content = format!("Event {} has been canceled!", event.name);
        self.fan_out(event, content, NotificationKind::Alert).await
    }

    /// Fans a `REMINDER` notification out to every participant of an upcoming event.
    ///
    /// # Arguments
    /// - `event` - The upcoming event
    ///
    /// # Returns
    /// - `Ok(count)` - Number of participants notified
    /// - `Err(AppError::DbErr)` - Reading the roster or persisting a record failed
    pub async fn event_reminder(&self, event: &Event) -> Result<usize, AppError> {
        let content = format!(
            "Event {} is coming soon!\nStarts at {}\nDon't forget to prepare yourself!",
            event.name,
            event.event_start.format("%A, %B %e, %Y")
        );
        self.fan_out(event, content, NotificationKind::Reminder).await
    }

    /// Emits one notification per participant of the event.
    ///
    /// Participants are notified sequentially; the first persistence failure
    /// aborts the fan-out for this event and propagates, leaving already
    /// persisted records in place.
    async fn fan_out(
        &self,
        event: &Event,
        content: String,
        kind: NotificationKind,
    ) -> Result<usize, AppError> {
        let participants = ParticipantRepository::new(self.db)
            .list_for_event(event.id)
            .await?;

        let mut notified = 0;
        for (participant, _, _) in participants {
            self.emit(EmitNotificationParams {
                recipient_id: participant.user_id,
                sender_id: None,
                event_id: Some(event.id),
                content: content.clone(),
                kind,
            })
            .await?;
            notified += 1;
        }

        Ok(notified)
    }
}
