use super::*;

/// Tests marking an event as canceled.
///
/// Expected: Ok with is_canceled set and is_done untouched
#[tokio::test]
async fn sets_canceled_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;

    let repo = EventRepository::new(db);
    let updated = repo.set_canceled(event.id).await?;

    assert!(updated.is_canceled);
    assert!(!updated.is_done);

    Ok(())
}

/// Tests marking an event as done.
///
/// Expected: Ok with is_done set and is_canceled untouched
#[tokio::test]
async fn sets_done_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;

    let repo = EventRepository::new(db);
    let updated = repo.set_done(event.id).await?;

    assert!(updated.is_done);
    assert!(!updated.is_canceled);

    Ok(())
}

/// Tests flagging an event that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let result = repo.set_canceled(999999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
