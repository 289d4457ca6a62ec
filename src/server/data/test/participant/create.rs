use super::*;

/// Tests creating an invited participant.
///
/// Verifies that the row starts with all lifecycle flags cleared and the
/// attendance state unset.
///
/// Expected: Ok with an invited participant row
#[tokio::test]
async fn creates_invited_participant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;
    let (joiner, _) = factory::user::create_user(db).await?;

    let repo = ParticipantRepository::new(db);
    let participant = repo.create(event.id, joiner.id, false).await?;

    assert_eq!(participant.event_id, event.id);
    assert_eq!(participant.user_id, joiner.id);
    assert!(!participant.accepted);
    assert!(!participant.declined);
    assert!(participant.attended.is_none());

    Ok(())
}

/// Tests creating a pre-accepted participant.
///
/// Expected: Ok with the accepted flag already set
#[tokio::test]
async fn creates_pre_accepted_participant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;

    let repo = ParticipantRepository::new(db);
    let participant = repo.create(event.id, owner.id, true).await?;

    assert!(participant.accepted);
    assert!(!participant.declined);

    Ok(())
}

/// Tests foreign key constraint on event_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::user::create_user(db).await?;

    let repo = ParticipantRepository::new(db);
    let result = repo.create(999999, user.id, false).await;

    assert!(result.is_err());

    Ok(())
}
