//! Notification emitter: durable records plus best-effort live delivery.
//!
//! This module provides the `NotificationService` for recording and delivering
//! notifications triggered by participation transitions, event-level changes,
//! and the reminder sweep. Emission is persist-then-push: a notification must
//! exist durably before live delivery is even attempted, so an offline or
//! unreachable recipient can still retrieve it later through the pull-style
//! query. Push failures are logged and swallowed, never surfaced to the
//! triggering business operation.
//!
//! The service is organized into separate modules by concern:
//! - `participant` - join/accept/decline notification content
//! - `event` - cancellation and reminder fan-out to all participants

pub mod event;
pub mod participant;

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::notification::{NotificationPushDto, SenderDto},
    server::{
        data::{notification::NotificationRepository, user::UserRepository},
        error::AppError,
        gateway::{registry::ConnectionRegistry, PushMessage},
        model::{
            notification::{EmitNotificationParams, Notification},
            user::UserSummary,
        },
    },
};

/// Service recording notifications and pushing them to connected recipients.
///
/// Holds references to the database connection and the connection registry.
/// The service layer contains the emission ordering rules and coordinates
/// between repositories (data layer) and the gateway; it does not perform
/// direct socket I/O.
pub struct NotificationService<'a> {
    /// Database connection for persisting and querying notification rows.
    db: &'a DatabaseConnection,
    /// Registry resolving recipients to their live session, when present.
    registry: &'a ConnectionRegistry,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `registry` - Reference to the connection registry
    ///
    /// # Returns
    /// - `NotificationService` - New service instance
    pub fn new(db: &'a DatabaseConnection, registry: &'a ConnectionRegistry) -> Self {
        Self { db, registry }
    }

    /// Emits a notification: persist first, then push if the recipient is live.
    ///
    /// Persistence failure aborts the operation and propagates to the caller.
    /// Everything after the row exists is best-effort: failures building or
    /// delivering the live payload are logged and swallowed.
    ///
    /// # Arguments
    /// - `params` - Emission parameters (recipient, optional sender/event, content, kind)
    ///
    /// # Returns
    /// - `Ok(Notification)` - The persisted notification
    /// - `Err(AppError::DbErr)` - Persistence failed
    pub async fn emit(&self, params: EmitNotificationParams) -> Result<Notification, AppError> {
        let row = NotificationRepository::new(self.db).create(&params).await?;

        match self.build_push_payload(&params).await {
            Ok(payload) => {
                let delivered = self
                    .registry
                    .push(params.recipient_id, PushMessage::Notification(payload))
                    .await;
                if !delivered {
                    tracing::debug!(
                        "Recipient {} has no live session; notification {} awaits retrieval",
                        params.recipient_id,
                        row.id
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    "Skipping live delivery for notification {}: {}",
                    row.id,
                    e
                );
            }
        }

        Ok(Notification::from_entity(row)?)
    }

    /// Deletes pending-decision notifications for an event/recipient pair.
    ///
    /// Used after the owner acts on a join request so a stale "wants to join"
    /// prompt is not shown again. Deleting zero rows is not an error.
    ///
    /// # Arguments
    /// - `event_id` - Event the pending decision belongs to
    /// - `recipient_id` - Owner the pending decision was addressed to
    ///
    /// # Returns
    /// - `Ok(())` - Matching rows removed (possibly none)
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete_pending(&self, event_id: i32, recipient_id: i32) -> Result<(), AppError> {
        let removed = NotificationRepository::new(self.db)
            .delete_pending(event_id, recipient_id)
            .await?;

        if removed > 0 {
            tracing::debug!(
                "Removed {} pending notification(s) for event {} recipient {}",
                removed,
                event_id,
                recipient_id
            );
        }

        Ok(())
    }

    /// Gets all notifications addressed to a recipient, newest first.
    ///
    /// The pull-style retrieval path for recipients that were offline when
    /// their notifications were emitted.
    ///
    /// # Arguments
    /// - `recipient_id` - User the notifications are addressed to
    ///
    /// # Returns
    /// - `Ok(notifications)` - Vector of notification domain models
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn find_all(&self, recipient_id: i32) -> Result<Vec<Notification>, AppError> {
        let rows = NotificationRepository::new(self.db)
            .find_by_recipient(recipient_id)
            .await?;

        let notifications = rows
            .into_iter()
            .map(Notification::from_entity)
            .collect::<Result<Vec<_>, DbErr>>()?;

        Ok(notifications)
    }

    /// Builds the live payload for an emission.
    ///
    /// The persisted content omits the sender's name (the sender id column
    /// identifies them); the live message prefixes the sender's first name
    /// for display.
    ///
    /// # Arguments
    /// - `params` - The emission parameters the payload is built from
    ///
    /// # Returns
    /// - `Ok(NotificationPushDto)` - Payload ready for the registry
    /// - `Err(DbErr)` - Failed to resolve the sender
    async fn build_push_payload(
        &self,
        params: &EmitNotificationParams,
    ) -> Result<NotificationPushDto, DbErr> {
        let sender = match params.sender_id {
            Some(sender_id) => UserRepository::new(self.db)
                .find_with_profile(sender_id)
                .await?,
            None => None,
        };

        let (sender_dto, message) = match sender {
            Some((user, profile)) => {
                let summary = UserSummary::from_entities(user, profile);
                let message = if summary.first_name.is_empty() {
                    params.content.clone()
                } else {
                    format!("{} {}", summary.first_name, params.content)
                };
                let dto = SenderDto {
                    id: summary.id,
                    username: summary.username,
                    first_name: summary.first_name,
                    last_name: summary.last_name,
                };
                (Some(dto), message)
            }
            None => (None, params.content.clone()),
        };

        Ok(NotificationPushDto {
            sender: sender_dto,
            message,
            kind: params.kind.as_str().to_string(),
        })
    }
}
