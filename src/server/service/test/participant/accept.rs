use super::*;

/// Tests accepting a join request.
///
/// Verifies the full transition: accepted flag set, member count advanced by
/// one, the owner's pending-decision notification removed, and a MESSAGE
/// notification emitted to the joining user.
///
/// Expected: Ok with all four effects applied
#[tokio::test]
async fn accept_transitions_and_notifies_joiner() -> Result<(), AppError> {
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

    service.accept(participant_id).await?;

    let participant = ParticipantRepository::new(db)
        .get_by_id(participant_id)
        .await?
        .unwrap();
    assert!(participant.accepted);

    let updated = EventRepository::new(db).get_by_id(event.id).await?.unwrap();
    assert_eq!(updated.member_count, 1);

    // The owner's pending-decision notification is gone after the decision.
    let pending = entity::prelude::Notification::find()
        .filter(entity::notification::Column::RecipientId.eq(owner.id))
        .filter(entity::notification::Column::Kind.eq("CONFIRMATION"))
        .all(db)
        .await
        .unwrap();
    assert!(pending.is_empty());

    let messages = entity::prelude::Notification::find()
        .filter(entity::notification::Column::RecipientId.eq(joiner.id))
        .filter(entity::notification::Column::Kind.eq("MESSAGE"))
        .all(db)
        .await
        .unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender_id, Some(owner.id));

    Ok(())
}

/// Tests that accept is not idempotent.
///
/// A second accept on the same participant fails and the member count stays
/// at one increment per distinct successful accept.
///
/// Expected: Err(Conflict) on the second accept, member count still 1
#[tokio::test]
async fn double_accept_fails_and_keeps_count() -> Result<(), AppError> {
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
    let participant_id = service.join(event.id, joiner.id, false).await?;

    service.accept(participant_id).await?;
    let result = service.accept(participant_id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    let updated = EventRepository::new(db).get_by_id(event.id).await?.unwrap();
    assert_eq!(updated.member_count, 1);

    Ok(())
}

/// Tests accepting an unknown participant.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn accept_unknown_participant_fails_with_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let service = ParticipantService::new(db, &registry);
    let result = service.accept(999999).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
