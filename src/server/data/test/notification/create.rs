use super::*;

/// Tests persisting a notification with event and sender references.
///
/// Expected: Ok with all columns stored as given
#[tokio::test]
async fn creates_notification_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;
    let (sender, _) = factory::user::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let row = repo
        .create(&EmitNotificationParams {
            recipient_id: owner.id,
            sender_id: Some(sender.id),
            event_id: Some(event.id),
            content: "will be attending your event \"Garden Party\"!".to_string(),
            kind: NotificationKind::Confirmation,
        })
        .await?;

    assert_eq!(row.recipient_id, owner.id);
    assert_eq!(row.sender_id, Some(sender.id));
    assert_eq!(row.event_id, Some(event.id));
    assert_eq!(row.kind, "CONFIRMATION");

    Ok(())
}

/// Tests persisting a notification without sender or event.
///
/// Reminder and alert records emitted by the system carry no sender.
///
/// Expected: Ok with null sender and event references
#[tokio::test]
async fn creates_notification_without_sender() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (recipient, _) = factory::user::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let row = repo
        .create(&EmitNotificationParams {
            recipient_id: recipient.id,
            sender_id: None,
            event_id: None,
            content: "Event Garden Party has been canceled!".to_string(),
            kind: NotificationKind::Alert,
        })
        .await?;

    assert!(row.sender_id.is_none());
    assert!(row.event_id.is_none());
    assert_eq!(row.kind, "ALERT");

    Ok(())
}
