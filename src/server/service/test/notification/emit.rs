use super::*;

/// Tests the push-or-persist invariant for offline recipients.
///
/// Emitting to a user with no registered session must still leave one
/// persisted row retrievable through the pull-style query.
///
/// Expected: Ok with the row visible via find_all
#[tokio::test]
async fn emit_without_session_persists_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let (recipient, _) = factory::user::create_user(db).await?;

    let service = NotificationService::new(db, &registry);
    service
        .emit(EmitNotificationParams {
            recipient_id: recipient.id,
            sender_id: None,
            event_id: None,
            content: "Event Garden Party has been canceled!".to_string(),
            kind: NotificationKind::Alert,
        })
        .await?;

    let stored = service.find_all(recipient.id).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].kind, NotificationKind::Alert);

    Ok(())
}

/// Tests live delivery to a registered session.
///
/// The persisted content omits the sender name while the live message is
/// prefixed with the sender's first name.
///
/// Expected: Ok with a notification frame on the session channel
#[tokio::test]
async fn emit_pushes_to_registered_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let (recipient, _) = factory::user::create_user(db).await?;
    let (sender, sender_profile) = factory::user::UserFactory::new(db)
        .first_name("Alice")
        .build()
        .await
        .map_err(AppError::from)?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    registry.register(recipient.id, SessionHandle::new(tx)).await;

    let service = NotificationService::new(db, &registry);
    let stored = service
        .emit(EmitNotificationParams {
            recipient_id: recipient.id,
            sender_id: Some(sender.id),
            event_id: None,
            content: "accepted you into the event \"Garden Party\"".to_string(),
            kind: NotificationKind::Message,
        })
        .await?;

    assert_eq!(
        stored.content,
        "accepted you into the event \"Garden Party\""
    );

    match rx.try_recv().unwrap() {
        PushMessage::Notification(payload) => {
            assert_eq!(
                payload.message,
                "Alice accepted you into the event \"Garden Party\""
            );
            assert_eq!(payload.kind, "MESSAGE");
            let pushed_sender = payload.sender.unwrap();
            assert_eq!(pushed_sender.id, sender.id);
            assert_eq!(pushed_sender.first_name, sender_profile.first_name);
        }
        other => panic!("unexpected frame: {:?}", other),
    }

    Ok(())
}

/// Tests that a dead session never fails the emission.
///
/// The session task's receiver is dropped before emitting; the push is
/// swallowed and the row still persists.
///
/// Expected: Ok with the row visible via find_all
#[tokio::test]
async fn emit_to_dead_session_still_persists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let (recipient, _) = factory::user::create_user(db).await?;

    let (tx, rx) = mpsc::unbounded_channel();
    registry.register(recipient.id, SessionHandle::new(tx)).await;
    drop(rx);

    let service = NotificationService::new(db, &registry);
    service
        .emit(EmitNotificationParams {
            recipient_id: recipient.id,
            sender_id: None,
            event_id: None,
            content: "Event Garden Party is coming soon!".to_string(),
            kind: NotificationKind::Reminder,
        })
        .await?;

    let stored = service.find_all(recipient.id).await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}

/// Tests that only the most recent session of a recipient is targeted.
///
/// After a reconnect, emission reaches the replacement session and never the
/// orphaned one.
///
/// Expected: frame on the second session only
#[tokio::test]
async fn emit_targets_most_recent_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let (recipient, _) = factory::user::create_user(db).await?;

    let (tx1, mut rx1) = mpsc::unbounded_channel();
    let (tx2, mut rx2) = mpsc::unbounded_channel();
    registry.register(recipient.id, SessionHandle::new(tx1)).await;
    registry.register(recipient.id, SessionHandle::new(tx2)).await;

    let service = NotificationService::new(db, &registry);
    service
        .emit(EmitNotificationParams {
            recipient_id: recipient.id,
            sender_id: None,
            event_id: None,
            content: "Event Garden Party has been canceled!".to_string(),
            kind: NotificationKind::Alert,
        })
        .await?;

    assert!(rx1.try_recv().is_err());
    assert!(rx2.try_recv().is_ok());

    Ok(())
}
