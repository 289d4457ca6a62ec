use super::*;

/// Tests joining a user to an event.
///
/// Verifies that the participant starts invited and that a pending-decision
/// CONFIRMATION notification is emitted to the event owner.
///
/// Expected: Ok with an invited participant and one owner notification
#[tokio::test]
async fn join_creates_invited_participant_and_notifies_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let (owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;
    let (joiner, _) = factory::user::create_user(db).await?;

    let service = ParticipantService::new(db, &registry);
    let participant_id = service.join(event.id, joiner.id, false).await?;

    let participant = ParticipantRepository::new(db)
        .get_by_id(participant_id)
        .await?
        .unwrap();
    assert!(!participant.accepted);
    assert!(!participant.declined);

    let pending = entity::prelude::Notification::find()
        .filter(entity::notification::Column::RecipientId.eq(owner.id))
        .filter(entity::notification::Column::Kind.eq("CONFIRMATION"))
        .all(db)
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].event_id, Some(event.id));
    assert_eq!(pending[0].sender_id, Some(joiner.id));

    Ok(())
}

/// Tests that joining the same event twice fails.
///
/// Expected: Err(Conflict) on the second join
#[tokio::test]
async fn join_twice_fails_with_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let (_owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;
    let (joiner, _) = factory::user::create_user(db).await?;

    let service = ParticipantService::new(db, &registry);
    service.join(event.id, joiner.id, false).await?;

    let result = service.join(event.id, joiner.id, false).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests joining an event that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn join_unknown_event_fails_with_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let (joiner, _) = factory::user::create_user(db).await?;

    let service = ParticipantService::new(db, &registry);
    let result = service.join(999999, joiner.id, false).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the pre-accepted join used for the owner's auto-join.
///
/// A pre-accepted join counts as an acceptance: the member count advances
/// and no pending-decision notification is emitted.
///
/// Expected: Ok with an accepted participant, member count 1, no notifications
#[tokio::test]
async fn pre_accepted_join_counts_as_acceptance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let (owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;

    let service = ParticipantService::new(db, &registry);
    let participant_id = service.join(event.id, owner.id, true).await?;

    let participant = ParticipantRepository::new(db)
        .get_by_id(participant_id)
        .await?
        .unwrap();
    assert!(participant.accepted);

    let event = EventRepository::new(db).get_by_id(event.id).await?.unwrap();
    assert_eq!(event.member_count, 1);

    let notifications = entity::prelude::Notification::find().all(db).await.unwrap();
    assert!(notifications.is_empty());

    Ok(())
}
