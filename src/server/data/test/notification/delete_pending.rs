use super::*;

/// Tests that the dedup rule removes only CONFIRMATION rows for the pair.
///
/// Other kinds for the same pair, and CONFIRMATION rows for other recipients
/// or events, must survive.
///
/// Expected: Ok(1) with only the pending-decision row removed
#[tokio::test]
async fn removes_only_pending_rows_for_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;
    let (other_user, _) = factory::user::create_user(db).await?;
    let other_event = factory::event::create_event(db, owner.id).await?;

    let pending = factory::notification::NotificationFactory::new(db, owner.id)
        .event_id(Some(event.id))
        .kind("CONFIRMATION")
        .build()
        .await?;
    let message = factory::notification::NotificationFactory::new(db, owner.id)
        .event_id(Some(event.id))
        .kind("MESSAGE")
        .build()
        .await?;
    let other_recipient = factory::notification::NotificationFactory::new(db, other_user.id)
        .event_id(Some(event.id))
        .kind("CONFIRMATION")
        .build()
        .await?;
    let other_event_row = factory::notification::NotificationFactory::new(db, owner.id)
        .event_id(Some(other_event.id))
        .kind("CONFIRMATION")
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let removed = repo.delete_pending(event.id, owner.id).await?;
    assert_eq!(removed, 1);

    let remaining: Vec<i32> = repo
        .find_by_recipient(owner.id)
        .await?
        .into_iter()
        .map(|n| n.id)
        .collect();
    assert!(!remaining.contains(&pending.id));
    assert!(remaining.contains(&message.id));
    assert!(remaining.contains(&other_event_row.id));

    let other_remaining = repo.find_by_recipient(other_user.id).await?;
    assert!(other_remaining.iter().any(|n| n.id == other_recipient.id));

    Ok(())
}

/// Tests deleting when no pending rows exist.
///
/// Expected: Ok(0), not an error
#[tokio::test]
async fn deleting_nothing_is_not_an_error() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;

    let repo = NotificationRepository::new(db);
    let removed = repo.delete_pending(event.id, owner.id).await?;

    assert_eq!(removed, 0);

    Ok(())
}
