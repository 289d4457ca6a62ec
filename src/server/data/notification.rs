use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::notification::{EmitNotificationParams, NotificationKind};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a notification record
    ///
    /// # Arguments
    /// - `params`: Emission parameters (recipient, optional sender/event, content, kind)
    ///
    /// # Returns
    /// - `Ok(Model)`: The created notification
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: &EmitNotificationParams,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            event_id: ActiveValue::Set(params.event_id),
            sender_id: ActiveValue::Set(params.sender_id),
            recipient_id: ActiveValue::Set(params.recipient_id),
            content: ActiveValue::Set(params.content.clone()),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all notifications addressed to a recipient, newest first
    ///
    /// # Arguments
    /// - `recipient_id`: User the notifications are addressed to
    ///
    /// # Returns
    /// - `Ok(notifications)`: Vector of notification rows
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_recipient(
        &self,
        recipient_id: i32,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::RecipientId.eq(recipient_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes pending-decision notifications for an event/recipient pair
    ///
    /// Removes only `CONFIRMATION` rows, which represent an open join request
    /// awaiting the recipient's decision. Deleting zero rows is not an error.
    ///
    /// # Arguments
    /// - `event_id`: Event the pending decision belongs to
    /// - `recipient_id`: Owner the pending decision was addressed to
    ///
    /// # Returns
    /// - `Ok(rows_affected)`: Number of rows deleted
    /// - `Err(DbErr)`: Database error
    pub async fn delete_pending(&self, event_id: i32, recipient_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::EventId.eq(event_id))
            .filter(entity::notification::Column::RecipientId.eq(recipient_id))
            .filter(
                entity::notification::Column::Kind.eq(NotificationKind::Confirmation.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
