use super::*;

/// Tests that retrieval is scoped to the recipient and ordered newest first.
///
/// Expected: Ok with only the recipient's rows, newest first
#[tokio::test]
async fn returns_recipient_rows_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (recipient, _) = factory::user::create_user(db).await?;
    let (other, _) = factory::user::create_user(db).await?;

    let first = factory::notification::create_notification(db, recipient.id).await?;
    let second = factory::notification::create_notification(db, recipient.id).await?;
    factory::notification::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let rows = repo.find_by_recipient(recipient.id).await?;

    assert_eq!(rows.len(), 2);
    // Newest first; the factory stamps both with the current time, so the
    // id tiebreaker decides.
    assert_eq!(rows[0].id, second.id);
    assert_eq!(rows[1].id, first.id);

    Ok(())
}

/// Tests retrieval for a recipient with no notifications.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_unknown_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let rows = repo.find_by_recipient(999999).await?;

    assert!(rows.is_empty());

    Ok(())
}
