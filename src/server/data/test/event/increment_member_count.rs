use super::*;

/// Tests advancing the member count by one.
///
/// Verifies that the storage-level increment advances the counter by exactly
/// one per call without touching other columns.
///
/// Expected: Ok with member_count raised from 0 to 2 after two calls
#[tokio::test]
async fn advances_count_by_one_per_call() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;
    assert_eq!(event.member_count, 0);

    let repo = EventRepository::new(db);
    repo.increment_member_count(event.id).await?;
    repo.increment_member_count(event.id).await?;

    let updated = repo.get_by_id(event.id).await?.unwrap();
    assert_eq!(updated.member_count, 2);
    assert_eq!(updated.name, event.name);

    Ok(())
}

/// Tests that incrementing one event leaves others untouched.
///
/// Expected: Ok with only the targeted event's counter advanced
#[tokio::test]
async fn only_targets_the_given_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _profile, first) = factory::helpers::create_event_with_owner(db).await?;
    let second = factory::event::create_event(db, owner.id).await?;

    let repo = EventRepository::new(db);
    repo.increment_member_count(first.id).await?;

    assert_eq!(repo.get_by_id(first.id).await?.unwrap().member_count, 1);
    assert_eq!(repo.get_by_id(second.id).await?.unwrap().member_count, 0);

    Ok(())
}
