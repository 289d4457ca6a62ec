use super::*;

/// Tests looking up the participant row for a user on an event.
///
/// Expected: Ok(Some) for a joined user, Ok(None) otherwise
#[tokio::test]
async fn finds_joined_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, joiner, event, participant) =
        factory::helpers::create_event_with_participant(db).await?;

    let repo = ParticipantRepository::new(db);

    let found = repo.get_by_event_and_user(event.id, joiner.id).await?;
    assert_eq!(found.map(|p| p.id), Some(participant.id));

    let missing = repo.get_by_event_and_user(event.id, 999999).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests that the lookup is scoped to the event.
///
/// A user joined to one event must not be reported as joined to another.
///
/// Expected: Ok(None) for the other event
#[tokio::test]
async fn scopes_lookup_to_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, joiner, _event, _participant) =
        factory::helpers::create_event_with_participant(db).await?;
    let other_event = factory::event::create_event(db, owner.id).await?;

    let repo = ParticipantRepository::new(db);
    let found = repo.get_by_event_and_user(other_event.id, joiner.id).await?;

    assert!(found.is_none());

    Ok(())
}
